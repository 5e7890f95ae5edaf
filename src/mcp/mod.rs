//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, results, constants)
//! - RPC helpers (success/error responses, widget metadata)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)
//! - The method dispatch table and HTTP routes

pub mod dispatch;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod routes;

// Re-export commonly used types and functions
pub use dispatch::Dispatcher;
pub use routes::routes;
