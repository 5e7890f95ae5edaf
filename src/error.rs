//! Error types for the rickroller server.

use thiserror::Error;

use crate::widget::CatalogError;

/// Result type alias for server startup and serving.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop the server process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON-RPC level failures, answered with an error envelope.
///
/// Tool and resource lookups never produce these: an unknown tool or URI is
/// a regular result carrying an error flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("Parse error")]
    Parse,

    #[error("Invalid Request")]
    InvalidRequest(String),

    #[error("Method not found")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpcError {
    /// The JSON-RPC 2.0 error code
    pub fn code(&self) -> i32 {
        match self {
            RpcError::Parse => -32700,
            RpcError::InvalidRequest(_) => -32600,
            RpcError::MethodNotFound(_) => -32601,
            RpcError::InvalidParams(_) => -32602,
            RpcError::Internal(_) => -32603,
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::InvalidParams(err.to_string())
    }
}
