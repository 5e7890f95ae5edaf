//! MCP (Model Context Protocol) method handlers
//!
//! Each handler maps the catalog (plus request params) to a typed result.
//! They never fail: unknown tools, unknown resources and bad arguments all
//! come back as data the host can render.

use super::{helpers::*, models::*};
use crate::widget::{validate_input, Catalog};
use serde_json::json;

/// Text returned when `tools/call` names a tool that does not exist
pub const UNKNOWN_TOOL: &str = "Unknown tool";
/// Error recorded in `_meta` when `resources/read` misses
pub const UNKNOWN_RESOURCE: &str = "Unknown resource";

/// Handles `initialize` request (Handshake).
pub fn initialize() -> InitializeResult {
    InitializeResult {
        protocol_version: PROTOCOL_VERSION.into(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
            resources: ResourcesCapability {
                list_changed: false,
                subscribe: false,
            },
        },
        server_info: ServerInfo {
            name: SERVER_NAME.into(),
            version: SERVER_VERSION.into(),
        },
    }
}

/// Handles `tools/list` request.
pub fn list_tools(catalog: &Catalog) -> ListToolsResult {
    let tools = catalog
        .widgets()
        .map(|w| Tool {
            name: w.identifier.clone(),
            title: w.title.clone(),
            description: w.description.clone(),
            input_schema: input_schema(),
            meta: tool_meta(w),
        })
        .collect();

    ListToolsResult { tools }
}

/// Handles `resources/list` request.
pub fn list_resources(catalog: &Catalog) -> ListResourcesResult {
    let resources = catalog
        .widgets()
        .map(|w| Resource {
            name: w.title.clone(),
            title: w.title.clone(),
            uri: w.template_uri.clone(),
            description: w.resource_description.clone(),
            mime_type: WIDGET_MIME_TYPE.into(),
            meta: widget_meta(w),
        })
        .collect();

    ListResourcesResult { resources }
}

/// Handles `resources/templates/list` request.
pub fn list_resource_templates(catalog: &Catalog) -> ListResourceTemplatesResult {
    let resource_templates = catalog
        .widgets()
        .map(|w| ResourceTemplate {
            name: w.title.clone(),
            title: w.title.clone(),
            uri_template: w.template_uri.clone(),
            description: w.resource_description.clone(),
            mime_type: WIDGET_MIME_TYPE.into(),
            meta: widget_meta(w),
        })
        .collect();

    ListResourceTemplatesResult { resource_templates }
}

/// Handles `resources/read` request.
pub fn read_resource(catalog: &Catalog, uri: &str) -> ReadResourceResult {
    let Some(widget) = catalog.by_uri(uri) else {
        tracing::warn!(uri, "unknown resource requested");
        return ReadResourceResult {
            contents: Vec::new(),
            meta: Some(json!({ "error": UNKNOWN_RESOURCE })),
        };
    };

    ReadResourceResult {
        contents: vec![TextResourceContents {
            uri: widget.template_uri.clone(),
            mime_type: WIDGET_MIME_TYPE.into(),
            text: widget.html.clone(),
            title: None,
            meta: Some(widget_meta(widget)),
        }],
        meta: None,
    }
}

/// Handles `tools/call` request.
pub fn call_tool(catalog: &Catalog, params: &CallToolParams) -> CallToolResult {
    let Some(widget) = catalog.by_identifier(&params.name) else {
        tracing::warn!(tool = %params.name, "unknown tool called");
        return CallToolResult::error(UNKNOWN_TOOL);
    };

    let input = match validate_input(params.arguments.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(tool = %params.name, error = %err, "tool arguments rejected");
            return CallToolResult::error(format!("Validation error: {}", err));
        }
    };

    CallToolResult {
        content: vec![Content::Text {
            text: widget.response_text.clone(),
        }],
        structured_content: Some(json!(input)),
        is_error: false,
        meta: Some(call_meta(widget)),
    }
}
