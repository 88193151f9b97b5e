use hp_core::logger::init_tracing;
use tracing::info;

use crate::config::PingerConfig;
use crate::keep_alive::pinger::KeepAlive;
use crate::keep_alive::target::HttpPingTarget;

mod config;
mod error;
mod keep_alive;
mod server;

#[tokio::main]
async fn run() -> error::Result<()> {
    init_tracing();
    let config = PingerConfig::from_env()?;

    let target = HttpPingTarget::new(&config.target_url);
    let keep_alive = KeepAlive::new(target, config.interval).spawn();

    let served = server::http_server::http_server_pinger(&config).await;
    keep_alive.stop();
    let stats = keep_alive.stats();
    info!(
        ticks = stats.ticks(),
        successes = stats.successes(),
        failures = stats.failures(),
        "keep-alive stopped"
    );
    served
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
