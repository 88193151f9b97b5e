use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub results: Vec<PredictionResult>,
}

/// One row of the prediction service answer. Only `predicted_price` is required;
/// the service also echoes the request fields back, they are parsed but unused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: PredictedPrice,
    #[serde(default)]
    pub predicted_price_raw: Option<i64>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub bedroom: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
}

/// The service formats prices as text (`"₹45.20 L"`) but a bare number is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictedPrice {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for PredictedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedPrice::Text(s) => f.write_str(s),
            PredictedPrice::Number(n) => write!(f, "{n}"),
        }
    }
}

impl PredictResponse {
    /// The price of the first result, the only value the form displays.
    pub fn first_price(&self) -> Result<&PredictedPrice> {
        self.results
            .first()
            .map(|result| &result.predicted_price)
            .ok_or(Error::EmptyPrediction)
    }
}
