//! Widget Catalog
//!
//! Immutable list of widget descriptors with two lookup indices. The indices
//! hold positions into the list, so they can never disagree with it.

use super::builtin::builtin_widgets;
use super::models::WidgetDescriptor;
use std::collections::HashMap;
use thiserror::Error;

/// Raised when a catalog would contain two widgets with the same key
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate widget identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("duplicate widget template URI: {0}")]
    DuplicateUri(String),
}

/// Read-only set of widgets, indexed by identifier and by template URI
#[derive(Debug)]
pub struct Catalog {
    widgets: Vec<WidgetDescriptor>,
    by_identifier: HashMap<String, usize>,
    by_uri: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate identifiers or URIs.
    pub fn new(widgets: Vec<WidgetDescriptor>) -> Result<Self, CatalogError> {
        let mut by_identifier = HashMap::with_capacity(widgets.len());
        let mut by_uri = HashMap::with_capacity(widgets.len());

        for (index, widget) in widgets.iter().enumerate() {
            if by_identifier
                .insert(widget.identifier.clone(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateIdentifier(widget.identifier.clone()));
            }
            if by_uri.insert(widget.template_uri.clone(), index).is_some() {
                return Err(CatalogError::DuplicateUri(widget.template_uri.clone()));
            }
        }

        Ok(Self {
            widgets,
            by_identifier,
            by_uri,
        })
    }

    /// The catalog of built-in widgets
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_widgets())
    }

    pub fn by_identifier(&self, identifier: &str) -> Option<&WidgetDescriptor> {
        self.by_identifier
            .get(identifier)
            .map(|&index| &self.widgets[index])
    }

    pub fn by_uri(&self, uri: &str) -> Option<&WidgetDescriptor> {
        self.by_uri.get(uri).map(|&index| &self.widgets[index])
    }

    /// Widgets in declaration order
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
