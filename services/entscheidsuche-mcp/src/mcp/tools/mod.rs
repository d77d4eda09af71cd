//! MCP tool implementations
//!
//! This module contains the tool handlers that expose the court
//! decision operations to MCP clients.

pub mod get_collection_status;
pub mod get_document;
pub mod get_document_urls;
pub mod get_server_info;
pub mod handler;
pub mod helpers;
pub mod list_courts;
pub mod registry;
pub mod search;

pub use get_collection_status::GetCollectionStatusHandler;
pub use get_document::GetDocumentHandler;
pub use get_document_urls::GetDocumentUrlsHandler;
pub use get_server_info::GetServerInfoHandler;
pub use handler::{text_content, McpToolHandler};
pub use helpers::{format_bytes, parse_args, truncate_text};
pub use list_courts::ListCourtsHandler;
pub use registry::ToolRegistry;
pub use search::SearchHandler;
