use serde::{Deserialize, Serialize};

/// Body of `POST /api/predict/`.
///
/// The wire format is array-shaped but the form only ever submits one
/// size/bedrooms/city triple, so the only constructor is [`PredictRequest::single`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    sizes: Vec<f64>,
    bedrooms: Vec<f64>,
    cities: Vec<String>,
}

impl PredictRequest {
    pub fn single(size: f64, bedrooms: f64, city: impl Into<String>) -> Self {
        PredictRequest {
            sizes: vec![size],
            bedrooms: vec![bedrooms],
            cities: vec![city.into()],
        }
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn bedrooms(&self) -> &[f64] {
        &self.bedrooms
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}
