//! Widget tool input validation
//!
//! Tool arguments arrive as free-form JSON. The only accepted field is an
//! optional boolean `autoplay`; anything else is reported back to the caller.

use super::models::WidgetInput;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Name of the only accepted argument
pub const AUTOPLAY_FIELD: &str = "autoplay";

/// Category of a single validation problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The arguments value itself is not a JSON object
    NotAnObject,
    /// A field outside the schema was supplied
    ExtraForbidden,
    /// `autoplay` was supplied with a non-boolean value
    BoolType,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::NotAnObject => "model_type",
            IssueKind::ExtraForbidden => "extra_forbidden",
            IssueKind::BoolType => "bool_type",
        }
    }

    fn message(self) -> &'static str {
        match self {
            IssueKind::NotAnObject => "Input should be an object",
            IssueKind::ExtraForbidden => "Extra inputs are not permitted",
            IssueKind::BoolType => "Input should be a valid boolean",
        }
    }
}

/// One field-level diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Offending field name, empty when the whole input is rejected
    pub field: String,
    pub kind: IssueKind,
    /// The rejected value
    pub input: Value,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.field.is_empty() {
            "arguments"
        } else {
            self.field.as_str()
        };
        write!(
            f,
            "{}: {} [type={}, input={}]",
            field,
            self.kind.message(),
            self.kind.as_str(),
            self.input
        )
    }
}

/// Every problem found in a set of tool arguments
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation error(s): {}", .issues.len(), render(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn render(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates raw tool arguments into a [`WidgetInput`].
///
/// Missing or `null` arguments count as an empty object. Booleans are
/// checked strictly: `"true"` or `1` are rejected.
pub fn validate_input(arguments: Option<&Value>) -> Result<WidgetInput, ValidationError> {
    let empty = Map::new();
    let fields = match arguments {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(fields)) => fields,
        Some(other) => {
            return Err(ValidationError {
                issues: vec![FieldIssue {
                    field: String::new(),
                    kind: IssueKind::NotAnObject,
                    input: other.clone(),
                }],
            })
        }
    };

    let mut input = WidgetInput::default();
    let mut issues = Vec::new();

    for (name, value) in fields {
        match (name.as_str(), value) {
            (AUTOPLAY_FIELD, Value::Bool(autoplay)) => input.autoplay = *autoplay,
            (AUTOPLAY_FIELD, other) => issues.push(FieldIssue {
                field: name.clone(),
                kind: IssueKind::BoolType,
                input: other.clone(),
            }),
            _ => issues.push(FieldIssue {
                field: name.clone(),
                kind: IssueKind::ExtraForbidden,
                input: value.clone(),
            }),
        }
    }

    if issues.is_empty() {
        Ok(input)
    } else {
        Err(ValidationError { issues })
    }
}
