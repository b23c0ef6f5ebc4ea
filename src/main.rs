//! HTTP server for the shift summary engine.

use std::net::SocketAddr;

use shift_summary::api::{AppState, create_router};
use shift_summary::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var("SHIFT_SUMMARY_CONFIG") {
        Ok(path) => ConfigLoader::load(path)?,
        Err(_) => {
            info!("SHIFT_SUMMARY_CONFIG not set, using default pricing");
            ConfigLoader::default()
        }
    };

    let addr: SocketAddr = std::env::var("SHIFT_SUMMARY_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Shift summary server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
