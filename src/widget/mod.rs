//! Widget Domain Module
//!
//! This module contains everything about the widgets themselves:
//! - Domain models (WidgetDescriptor, WidgetInput)
//! - The built-in widget definitions
//! - The immutable catalog and its lookups
//! - Tool input validation

pub mod builtin;
pub mod catalog;
pub mod input;
pub mod models;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogError};
pub use input::{validate_input, ValidationError};
pub use models::{WidgetDescriptor, WidgetInput};
