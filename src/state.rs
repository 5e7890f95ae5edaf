//! Application State
//!
//! Everything a request handler needs, built once at startup and shared
//! read-only across requests.

use crate::mcp::dispatch::Dispatcher;
use crate::widget::Catalog;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Immutable catalog plus the method table that serves it
pub struct AppState {
    pub catalog: Catalog,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        tracing::info!(widgets = catalog.len(), "catalog loaded");
        Self {
            catalog,
            dispatcher: Dispatcher::new(),
        }
    }
}
