//! fhirctl binary entrypoint

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir_client::{ClientConfig, RecordClient};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = RecordClient::new(ClientConfig::new(&cli.server));

    match &cli.command {
        Commands::Checkup(args) => commands::checkup::run(&client, args).await,
        Commands::MedicationHistory(args) => commands::medication::run(&client, args).await,
        Commands::Vaccination(args) => commands::vaccination::run(&client, args).await,
    }
}
