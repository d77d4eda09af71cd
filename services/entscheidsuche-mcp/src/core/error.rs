//! Error types and error handling for the entscheidsuche adapter.
//!
//! This module defines the error taxonomy shared by the upstream
//! client, the normalizers and the adapters. Protocol-specific error
//! handling (MCP error codes) is handled in the respective adapter
//! modules.

use thiserror::Error;

/// Result type alias for entscheidsuche operations
pub type Result<T> = std::result::Result<T, EntscheidsucheError>;

/// Main error type for the entscheidsuche adapter
#[derive(Error, Debug)]
pub enum EntscheidsucheError {
    /// Connection-level failure (DNS, refused, reset, timeout)
    #[error("Upstream unreachable ({url}): {message}")]
    UpstreamUnreachable { url: String, message: String },

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamHttp { status: u16, url: String },

    /// Body was expected to be JSON but is not
    #[error("Unparseable response from {url}: {message}")]
    UnparseableResponse { url: String, message: String },

    /// Well-formed empty answer
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Document fetch failed ({url}): {reason}")]
    DocumentFetchFailed { url: String, reason: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid parameter: {0}")]
    InvalidParams(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl EntscheidsucheError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        match self {
            EntscheidsucheError::NotFound(_) => true,
            EntscheidsucheError::UpstreamHttp { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            EntscheidsucheError::InvalidQuery(_)
                | EntscheidsucheError::InvalidParams(_)
                | EntscheidsucheError::ConfigError(_)
        )
    }

    /// Check if the failure originated at the remote service
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            EntscheidsucheError::UpstreamUnreachable { .. }
                | EntscheidsucheError::UpstreamHttp { .. }
                | EntscheidsucheError::UnparseableResponse { .. }
                | EntscheidsucheError::SearchFailed(_)
                | EntscheidsucheError::DocumentFetchFailed { .. }
        )
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            EntscheidsucheError::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}
