use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hotel_booking::config::AppConfig;
use hotel_booking::handlers;
use hotel_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let addr = config.bind_addr();

    let state = Arc::new(AppState::new(config));
    let app = handlers::router(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
