//! JSON-RPC method dispatch
//!
//! A table from method name to handler, built once per server and queried
//! for every request.

use super::{handlers, models::*};
use crate::error::RpcError;
use crate::widget::Catalog;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Signature shared by every routed method
pub type Handler = fn(&Catalog, Option<Value>) -> Result<Value, RpcError>;

/// Method-name to handler table
pub struct Dispatcher {
    table: HashMap<&'static str, Handler>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let mut table: HashMap<&'static str, Handler> = HashMap::new();
        table.insert(methods::INITIALIZE, |_, _| encode(handlers::initialize()));
        table.insert(methods::PING, |_, _| Ok(json!({})));
        table.insert(methods::NOTIFICATIONS_INITIALIZED, |_, _| Ok(json!({})));
        table.insert(methods::TOOLS_LIST, |catalog, _| {
            encode(handlers::list_tools(catalog))
        });
        table.insert(methods::RESOURCES_LIST, |catalog, _| {
            encode(handlers::list_resources(catalog))
        });
        table.insert(methods::RESOURCES_TEMPLATES_LIST, |catalog, _| {
            encode(handlers::list_resource_templates(catalog))
        });
        table.insert(methods::RESOURCES_READ, |catalog, params| {
            let params: ReadResourceParams = decode(params)?;
            encode(handlers::read_resource(catalog, &params.uri))
        });
        table.insert(methods::TOOLS_CALL, |catalog, params| {
            let params: CallToolParams = decode(params)?;
            encode(handlers::call_tool(catalog, &params))
        });

        Self { table }
    }

    /// Runs `method` against the catalog.
    pub fn dispatch(
        &self,
        catalog: &Catalog,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, RpcError> {
        let handler = self
            .table
            .get(method)
            .ok_or_else(|| RpcError::MethodNotFound(method.to_string()))?;
        handler(catalog, params)
    }

    pub fn supports(&self, method: &str) -> bool {
        self.table.contains_key(method)
    }
}

fn decode<T: DeserializeOwned>(params: Option<Value>) -> Result<T, RpcError> {
    let params = params.unwrap_or(Value::Null);
    Ok(serde_json::from_value(params)?)
}

fn encode<T: Serialize>(result: T) -> Result<Value, RpcError> {
    serde_json::to_value(result).map_err(|e| RpcError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let catalog = Catalog::builtin().unwrap();
        Dispatcher::new().dispatch(&catalog, method, params)
    }

    #[test]
    fn routes_every_method() {
        let dispatcher = Dispatcher::new();
        for method in [
            methods::INITIALIZE,
            methods::PING,
            methods::NOTIFICATIONS_INITIALIZED,
            methods::TOOLS_LIST,
            methods::TOOLS_CALL,
            methods::RESOURCES_LIST,
            methods::RESOURCES_TEMPLATES_LIST,
            methods::RESOURCES_READ,
        ] {
            assert!(dispatcher.supports(method), "{} not routed", method);
        }
    }

    #[test]
    fn unknown_method() {
        let err = run("unknown/method", None).unwrap_err();
        assert_eq!(err, RpcError::MethodNotFound("unknown/method".into()));
    }

    #[test]
    fn read_requires_uri() {
        let err = run(methods::RESOURCES_READ, None).unwrap_err();
        assert_eq!(err.code(), -32602);

        let err = run(methods::RESOURCES_READ, Some(json!({ "uri": 7 }))).unwrap_err();
        assert_eq!(err.code(), -32602);
    }

    #[test]
    fn call_requires_name() {
        let err = run(methods::TOOLS_CALL, Some(json!({ "arguments": {} }))).unwrap_err();
        assert_eq!(err.code(), -32602);
    }

    #[test]
    fn call_without_arguments() {
        let result = run(methods::TOOLS_CALL, Some(json!({ "name": "rick-roll" }))).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["autoplay"], false);
    }

    #[test]
    fn results_use_wire_names() {
        let templates = run(methods::RESOURCES_TEMPLATES_LIST, None).unwrap();
        let template = &templates["resourceTemplates"][0];
        assert_eq!(template["uriTemplate"], "uri://widget/rick-roll.html");
        assert_eq!(template["mimeType"], "text/html+skybridge");
        assert!(template["_meta"].is_object());

        let tools = run(methods::TOOLS_LIST, None).unwrap();
        assert!(tools["tools"][0]["inputSchema"].is_object());
    }
}
