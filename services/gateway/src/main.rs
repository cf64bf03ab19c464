mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::GatewayConfig;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting match result gateway");

    let config = GatewayConfig::from_env()?;
    let state = AppState::new(&config);

    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(config.addr).await?;

    tracing::info!("Listening on {}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
