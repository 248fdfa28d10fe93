use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use api::exchangerate::ExchangeRateClient;
use commands::{Console, Session};
use config::Config;
use services::conversion_service::DirectRateEngine;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing on stderr so it never mixes with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("currency_converter=warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error loading the API key: {}", e);
            std::process::exit(1);
        }
    };

    let client = match ExchangeRateClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting currency converter (timeout {}s, history file {})",
        config.request_timeout.as_secs(),
        config.history_path.display()
    );

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut session = Session::new(Arc::new(client), DirectRateEngine, console);

    if let Err(e) = session.run().await {
        error!("Session ended unexpectedly: {}", e);
    }

    let history = session.into_history();
    if history.is_empty() {
        info!("No conversions made, writing an empty history");
    } else {
        info!("Saving {} conversion(s)", history.len());
    }

    // Reported to the user only; the exit status stays 0
    if let Err(e) = history.write_to_file(&config.history_path) {
        println!("{}", e);
        println!("An error occurred while writing to the file.");
    }
}
