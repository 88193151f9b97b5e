use hp_core::error::Error as ErrorCore;
use hp_core::server::default_config::{
    DEFAULT_KEEP_ALIVE_INTERVAL_MS, DEFAULT_KEEP_ALIVE_URL, DEFAULT_SERVER_PINGER_HOST,
    DEFAULT_SERVER_PINGER_PORT, DEFAULT_SERVER_PINGER_PROTOCOL,
};
use std::env;
use std::time::Duration;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingerConfig {
    pub target_url: String,
    pub interval: Duration,
    pub host: String,
    pub port: u16,
    pub protocol: String,
}

impl PingerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to the defaults.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let target_url = get("KEEP_ALIVE_URL").unwrap_or(String::from(DEFAULT_KEEP_ALIVE_URL));
        let interval_ms = match get("KEEP_ALIVE_INTERVAL_MS") {
            Some(raw) => parse_interval_ms(&raw)?,
            None => DEFAULT_KEEP_ALIVE_INTERVAL_MS,
        };
        let host = get("SERVER_PINGER_HOST").unwrap_or(String::from(DEFAULT_SERVER_PINGER_HOST));
        let port = get("SERVER_PINGER_PORT").unwrap_or(String::from(DEFAULT_SERVER_PINGER_PORT));
        let port = port.trim().parse::<u16>().map_err(|e| ErrorCore::InvalidConfig {
            key: "SERVER_PINGER_PORT".to_string(),
            reason: e.to_string(),
        })?;
        let protocol =
            get("SERVER_PINGER_PROTOCOL").unwrap_or(String::from(DEFAULT_SERVER_PINGER_PROTOCOL));

        Ok(PingerConfig {
            target_url,
            interval: Duration::from_millis(interval_ms),
            host,
            port,
            protocol,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_interval_ms(raw: &str) -> Result<u64> {
    let invalid = |reason: String| ErrorCore::InvalidConfig {
        key: "KEEP_ALIVE_INTERVAL_MS".to_string(),
        reason,
    };
    let ms = raw.trim().parse::<u64>().map_err(|e| invalid(e.to_string()))?;
    if ms == 0 {
        return Err(invalid("must be greater than zero".to_string()).into());
    }
    Ok(ms)
}
