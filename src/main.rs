//! # Chirpy
//!
//! Application entry point. Initializes tracing, loads configuration,
//! connects the store and serves HTTP until Ctrl-C.

use anyhow::Result;
use tracing::info;

use chirpy::config::Settings;
use chirpy::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    chirpy::telemetry::init_tracing();

    info!("Starting Chirpy...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        platform = %settings.platform,
        static_root = %settings.server.static_root,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
