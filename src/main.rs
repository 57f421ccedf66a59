use facegate::{utils::config::Config, Application};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loads AWS credentials and APP_* overrides in development.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting facegate v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::new().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let app = Application::new(config).await.map_err(|e| {
        error!("Failed to initialize application: {}", e);
        e
    })?;

    app.run().await.map_err(|e| {
        error!("Server exited with error: {}", e);
        e
    })?;

    Ok(())
}
