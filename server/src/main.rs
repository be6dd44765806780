//! Job Board Development Server
//!
//! Loads the job catalog, indexes it with Tantivy and serves the job board
//! endpoints and pages using Axum.

use server::{AppState, config::Config, load_catalog};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    info!("🚀 Starting Job Board Server...");
    let config = Config::load()?;

    let catalog = load_catalog(&config.data_path).await;
    let state = AppState::new(catalog, config.authenticated)?;

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("🌐 Server running at http://{addr}");
    info!("   Try: curl 'http://{addr}/jobs/api/search?q=developer'");

    server::serve(listener, state).await?;
    Ok(())
}
