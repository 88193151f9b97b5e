use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about = "House price prediction form", long_about = None)]
pub struct Cli {
    /// Base URL of the prediction service (falls back to PREDICTOR_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a single prediction and print the price
    Predict {
        /// House size in sq ft
        #[arg(short, long)]
        size: String,
        #[arg(short, long)]
        bedrooms: String,
        #[arg(short, long, default_value = hp_core::types::city::DEFAULT_CITY)]
        city: String,
    },
    /// Fill in the form interactively
    Form,
    /// List the cities known to the model
    Cities,
}
