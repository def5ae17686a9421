//! Policy Content Service - Main Entry Point

use anyhow::Result;
use policy_server::{create_app, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,policy_server=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Policy Content Service");

    let state = AppState::new();
    let app = create_app(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Policy Content Service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
