use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] hp_core::error::Error),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Could not connect to {0}")]
    ConnectionRefused(String),
    #[error("No answer within {0:?}")]
    Timeout(std::time::Duration),
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
