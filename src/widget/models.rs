//! Widget Domain Models
//!
//! This module contains the data structures describing the widgets the
//! server exposes, plus the validated tool input.

use serde::Serialize;

// =============================================================================
// Widget Domain Models
// =============================================================================

/// One invocable capability: a tool plus the HTML resource it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Tool name, unique across the catalog
    pub identifier: String,

    /// Human-readable display name
    pub title: String,

    /// Resource locator of the widget markup, unique across the catalog
    pub template_uri: String,

    /// Tool description shown to the host
    pub description: String,

    /// Resource description shown to the host
    pub resource_description: String,

    /// Status text shown while the tool runs
    pub invoking_text: String,

    /// Status text shown once the tool has run
    pub invoked_text: String,

    /// Static markup returned as the resource body
    pub html: String,

    /// Short text returned as the tool's textual result
    pub response_text: String,
}

/// Validated arguments of a widget tool call
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct WidgetInput {
    /// Whether the host should autoplay the video (defaults to false)
    pub autoplay: bool,
}
