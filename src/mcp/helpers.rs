//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use super::models::{Content, TextResourceContents, WIDGET_MIME_TYPE};
use crate::error::RpcError;
use crate::widget::input::AUTOPLAY_FIELD;
use crate::widget::WidgetDescriptor;
use serde_json::{json, Value};

/// Constructs the metadata required by the OpenAI widget system.
///
/// The fields are defined by the Apps SDK:
/// - `openai/outputTemplate` – URI of the widget HTML.
/// - `openai/toolInvocation/invoking` / `invoked` – human readable
///   messages for the tool lifecycle.
/// - `openai/widgetAccessible` – the widget may call tools itself.
/// - `openai/resultCanProduceWidget` – tool results render the widget.
pub fn widget_meta(widget: &WidgetDescriptor) -> Value {
    json!({
        "openai/outputTemplate": widget.template_uri,
        "openai/toolInvocation/invoking": widget.invoking_text,
        "openai/toolInvocation/invoked": widget.invoked_text,
        "openai/widgetAccessible": true,
        "openai/resultCanProduceWidget": true,
    })
}

/// Widget metadata plus the behaviour hints attached to tool listings.
///
/// The hints are informational only.
pub fn tool_meta(widget: &WidgetDescriptor) -> Value {
    let mut meta = widget_meta(widget);
    meta["annotations"] = json!({
        "destructiveHint": false,
        "openWorldHint": false,
        "readOnlyHint": true,
    });
    meta
}

/// Metadata of a successful tool call: the widget markup travels along as
/// an embedded resource.
pub fn call_meta(widget: &WidgetDescriptor) -> Value {
    let embedded = Content::Resource {
        resource: TextResourceContents {
            uri: widget.template_uri.clone(),
            mime_type: WIDGET_MIME_TYPE.into(),
            text: widget.html.clone(),
            title: Some(widget.title.clone()),
            meta: None,
        },
    };

    let mut meta = widget_meta(widget);
    meta["openai.com/widget"] = json!(embedded);
    meta
}

/// JSON Schema of the widget tool arguments
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            AUTOPLAY_FIELD: { "type": "boolean", "description": "Autoplay the video" }
        },
        "additionalProperties": false
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Builds the JSON-RPC error response for an [`RpcError`].
pub fn rpc_failure(id: Value, err: &RpcError) -> Value {
    rpc_error(id, err.code(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::builtin::rick_roll;

    #[test]
    fn widget_meta_points_at_template() {
        let widget = rick_roll();
        let meta = widget_meta(&widget);

        assert_eq!(meta["openai/outputTemplate"], "uri://widget/rick-roll.html");
        assert_eq!(meta["openai/toolInvocation/invoking"], "Loading the Rick Roll...");
        assert_eq!(meta["openai/toolInvocation/invoked"], "Enjoy the Rick Roll!");
        assert_eq!(meta["openai/widgetAccessible"], true);
        assert_eq!(meta["openai/resultCanProduceWidget"], true);
        assert!(meta.get("annotations").is_none());
    }

    #[test]
    fn tool_meta_adds_annotations() {
        let meta = tool_meta(&rick_roll());
        assert_eq!(
            meta["annotations"],
            json!({ "destructiveHint": false, "openWorldHint": false, "readOnlyHint": true })
        );
        assert_eq!(meta["openai/outputTemplate"], "uri://widget/rick-roll.html");
    }

    #[test]
    fn call_meta_embeds_markup() {
        let widget = rick_roll();
        let embedded = &call_meta(&widget)["openai.com/widget"];

        assert_eq!(embedded["type"], "resource");
        assert_eq!(embedded["resource"]["uri"], widget.template_uri);
        assert_eq!(embedded["resource"]["mimeType"], WIDGET_MIME_TYPE);
        assert_eq!(embedded["resource"]["text"], widget.html);
        assert_eq!(embedded["resource"]["title"], widget.title);
    }

    #[test]
    fn input_schema_forbids_extra_fields() {
        let schema = input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["autoplay"]["type"], "boolean");
        assert_eq!(schema["additionalProperties"], false);
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);

        let failure = rpc_failure(json!(3), &RpcError::MethodNotFound("nope".into()));
        assert_eq!(failure["error"]["code"], -32601);
        assert_eq!(failure["error"]["message"], "Method not found");
    }
}
