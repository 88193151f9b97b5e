use crate::cli::{Cli, Commands};
use crate::client::PredictorClient;
use crate::error::Result;
use clap::Parser;
use hp_core::logger::init_tracing;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod form;
mod prompt;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let base_url = config::resolve_base_url(cli.base_url);
    let client = PredictorClient::new(&base_url);

    match cli.command {
        Commands::Predict {
            size,
            bedrooms,
            city,
        } => commands::predict::handle(client, size, bedrooms, city).await?,
        Commands::Form => commands::form::handler(client).await?,
        Commands::Cities => commands::cities::handle(),
    }

    Ok(())
}
