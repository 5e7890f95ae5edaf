//! Routing module for the rickroller server

use crate::config::{Config, CorsMode};
use crate::state::SharedState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState, config: &Config) -> Router {
    let router = Router::new()
        .merge(crate::mcp::routes())
        .layer(TraceLayer::new_for_http());

    let router = match config.cors {
        CorsMode::Permissive => router.layer(permissive_cors()),
        CorsMode::Disabled => {
            tracing::info!("CORS disabled");
            router
        }
    };

    router.with_state(state)
}

/// Any origin, method and header; credentials are never allowed.
fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
