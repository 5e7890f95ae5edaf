//! Rickroller Library
//!
//! An MCP (Model Context Protocol) server exposing a single video widget
//! to ChatGPT-style hosts.

// Domain modules
pub mod mcp;
pub mod widget;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
