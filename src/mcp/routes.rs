//! MCP HTTP transport
//!
//! JSON-RPC requests arrive as POST bodies; a GET on the SSE path answers
//! with the endpoint messages should be posted to.

use super::{helpers::*, models::JsonRpcRequest};
use crate::error::RpcError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::post,
    Json, Router,
};
use futures_util::stream::{self, Stream};
use serde_json::Value;
use std::convert::Infallible;

/// Path of the SSE handshake
pub const SSE_PATH: &str = "/mcp";
/// Path clients post messages to after the handshake
pub const MESSAGE_PATH: &str = "/mcp/messages";

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route(SSE_PATH, post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
        .route(MESSAGE_PATH, post(handle_mcp))
}

/// Endpoint: GET /mcp
/// Announces the message endpoint as a single SSE event.
async fn handle_mcp_sse() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let endpoint = Event::default().event("endpoint").data(MESSAGE_PATH);
    Sse::new(stream::once(async move { Ok(endpoint) }))
}

/// Endpoint: POST /mcp, POST /mcp/messages
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(r)) => r,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected JSON-RPC body");
            let err = match rejection {
                JsonRejection::JsonDataError(e) => RpcError::InvalidRequest(e.body_text()),
                _ => RpcError::Parse,
            };
            return (StatusCode::BAD_REQUEST, Json(rpc_failure(Value::Null, &err)))
                .into_response();
        }
    };

    tracing::debug!(method = %req.method, id = ?req.id, "MCP call");

    if req.is_notification() {
        return StatusCode::ACCEPTED.into_response();
    }

    let id = req.id.unwrap_or(Value::Null);
    let response_body = match state
        .dispatcher
        .dispatch(&state.catalog, &req.method, req.params)
    {
        Ok(result) => rpc_success(id, result),
        Err(err) => {
            tracing::warn!(method = %req.method, error = %err, "MCP call failed");
            rpc_failure(id, &err)
        }
    };

    Json(response_body).into_response()
}
