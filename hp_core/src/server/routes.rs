pub const API_PREFIX: &str = "/api";

pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

/// Routes served by the remote prediction service, relative to [`API_PREFIX`].
#[derive(Debug, Clone)]
pub enum PredictorApi {
    Predict,
}

impl PredictorApi {
    pub fn path(&self) -> ApiPath {
        match self {
            // trailing slash is part of the upstream route
            PredictorApi::Predict => ApiPath::Static("/predict/"),
        }
    }
}

/// Routes served by the keep-alive pinger itself.
#[derive(Debug, Clone)]
pub enum PingerApi {
    Greeting,
}

impl PingerApi {
    pub fn path(&self) -> ApiPath {
        match self {
            PingerApi::Greeting => ApiPath::Static("/"),
        }
    }
}

/// Joins a base URL with the prediction route, tolerating a trailing slash on the base.
pub fn predict_url(base_url: &str) -> String {
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        API_PREFIX,
        PredictorApi::Predict.path().as_str()
    )
}
