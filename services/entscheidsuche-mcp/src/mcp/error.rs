//! MCP-specific error types

use crate::core::error::EntscheidsucheError;
use crate::mcp::protocol::{
    DOCUMENT_FETCH_FAILED, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, NOT_FOUND,
    PARSE_ERROR, SEARCH_FAILED, UPSTREAM_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }

    /// Text shown to the client when a tool call fails
    pub fn tool_message(&self) -> String {
        match self {
            McpError::ToolError(_, msg)
            | McpError::InvalidParams(msg)
            | McpError::InternalError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<EntscheidsucheError> for McpError {
    fn from(err: EntscheidsucheError) -> Self {
        match err {
            EntscheidsucheError::InvalidQuery(s) => {
                McpError::InvalidParams(format!("Invalid query: {s}"))
            }
            EntscheidsucheError::InvalidParams(s) => McpError::InvalidParams(s),
            EntscheidsucheError::NotFound(s) => McpError::ToolError(NOT_FOUND, format!("Not found: {s}")),
            EntscheidsucheError::SearchFailed(s) => {
                McpError::ToolError(SEARCH_FAILED, format!("Search failed: {s}"))
            }
            e @ EntscheidsucheError::DocumentFetchFailed { .. } => {
                McpError::ToolError(DOCUMENT_FETCH_FAILED, e.to_string())
            }
            e @ EntscheidsucheError::UpstreamHttp { status: 404, .. } => {
                McpError::ToolError(NOT_FOUND, e.to_string())
            }
            e @ (EntscheidsucheError::UpstreamUnreachable { .. }
            | EntscheidsucheError::UpstreamHttp { .. }
            | EntscheidsucheError::UnparseableResponse { .. }) => {
                McpError::ToolError(UPSTREAM_ERROR, e.to_string())
            }
            EntscheidsucheError::ConfigError(s) => {
                McpError::InternalError(format!("Configuration error: {s}"))
            }
            EntscheidsucheError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            EntscheidsucheError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            EntscheidsucheError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
