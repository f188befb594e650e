//! Storefront console binary.
//!
//! Loads configuration from the environment and runs the interactive console
//! on stdin/stdout. Logs go to stderr.

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storefront_console::config::{Config, LogFormat};
use storefront_console::console::Console;
use storefront_console::ApiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!("Starting storefront console");
    tracing::info!("API base: {}", config.api_base);
    if let Some(timeout) = config.request_timeout {
        tracing::info!("Request timeout: {:?}", timeout);
    }

    let api = ApiClient::new(&config)?;

    let mut console = Console::new(api, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await?;

    tracing::info!("Console closed");
    Ok(())
}
