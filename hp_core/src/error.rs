use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Prediction response contains no results")]
    EmptyPrediction,

    #[error("Invalid configuration for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
}
