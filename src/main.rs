use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rickroller_rust::config::{Args, Config};
use rickroller_rust::error::Result;
use rickroller_rust::router::create_app_router;
use rickroller_rust::state::AppState;
use rickroller_rust::widget::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Args::parse().into();

    // RUST_LOG wins over --debug
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Initialize application state
    let state = Arc::new(AppState::new(Catalog::builtin()?));

    // Build application router with all routes and middleware
    let app = create_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
