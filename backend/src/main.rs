use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pregnancy_tracker_backend::config::AppConfig;
use pregnancy_tracker_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::parse();
    info!("Starting pregnancy tracker backend with {:?}", config);

    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config.cors_origin)?;

    info!("Server listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
