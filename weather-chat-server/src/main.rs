//! Binary crate for the weather chat HTTP server.
//!
//! This crate focuses on:
//! - Startup wiring (env, logging, configuration)
//! - HTTP routes and response presentation

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weather_chat_core::Config;
use weather_chat_server::api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing credentials must stop the process here, not surface on the
    // first request.
    let config = Config::from_env()?;

    let state = api::AppState::from_config(&config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "weather chat server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
