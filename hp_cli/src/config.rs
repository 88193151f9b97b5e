use hp_core::server::default_config::DEFAULT_PREDICTOR_BASE_URL;
use std::env;

pub const PREDICTOR_BASE_URL_ENV: &str = "PREDICTOR_BASE_URL";

/// Flag first, then environment, then the local development server.
pub fn resolve_base_url(flag: Option<String>) -> String {
    resolve_with(flag, env::var(PREDICTOR_BASE_URL_ENV).ok())
}

fn resolve_with(flag: Option<String>, from_env: Option<String>) -> String {
    flag.or(from_env)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(String::from(DEFAULT_PREDICTOR_BASE_URL))
}
