pub const DEFAULT_PREDICTOR_BASE_URL: &str = "http://localhost:5000";

pub const DEFAULT_KEEP_ALIVE_URL: &str = "https://house-price-predictor-fouz.onrender.com";
/// 30000 ms, i.e. one ping every 30 seconds.
pub const DEFAULT_KEEP_ALIVE_INTERVAL_MS: u64 = 30_000;

pub const DEFAULT_SERVER_PINGER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PINGER_PORT: &str = "4000";
pub const DEFAULT_SERVER_PINGER_PROTOCOL: &str = "http";
