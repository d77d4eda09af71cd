//! Read-only MCP resources
//!
//! - `entscheidsuche://courts`: all courts by canton
//! - `entscheidsuche://collections/{collection}`: scraper status
//! - `entscheidsuche://documents/{signature}`: document metadata
//!
//! Failures here are JSON-RPC errors, unlike tool failures.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use std::sync::Arc;

pub const URI_SCHEME: &str = "entscheidsuche://";
pub const COURTS_URI: &str = "entscheidsuche://courts";
const JSON_MIME: &str = "application/json";

/// A parsed resource URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Courts,
    Collection(String),
    Document(String),
}

impl ResourceUri {
    pub fn parse(uri: &str) -> Result<Self, McpError> {
        let unknown = || McpError::InvalidParams(format!("Unknown resource URI: {uri}"));

        let path = uri.strip_prefix(URI_SCHEME).ok_or_else(unknown)?;
        let path = path.trim_end_matches('/');

        if path == "courts" {
            return Ok(ResourceUri::Courts);
        }

        let (kind, name) = path.split_once('/').ok_or_else(unknown)?;
        if name.is_empty() || name.contains('/') {
            return Err(unknown());
        }
        match kind {
            "collections" => Ok(ResourceUri::Collection(name.to_string())),
            "documents" => Ok(ResourceUri::Document(name.to_string())),
            _ => Err(unknown()),
        }
    }
}

pub struct ResourceRegistry {
    services: Arc<Services>,
}

impl ResourceRegistry {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Static resources for resources/list
    pub fn list(&self) -> Vec<Resource> {
        vec![Resource {
            uri: COURTS_URI.to_string(),
            name: "Courts by canton".to_string(),
            description: Some(
                "All courts covered by entscheidsuche.ch, grouped by canton".to_string(),
            ),
            mime_type: Some(JSON_MIME.to_string()),
        }]
    }

    /// Parameterised resources for resources/templates/list
    pub fn templates(&self) -> Vec<ResourceTemplate> {
        vec![
            ResourceTemplate {
                uri_template: format!("{URI_SCHEME}collections/{{collection}}"),
                name: "Collection status".to_string(),
                description: Some(
                    "Last scrape time, document count and job type of a collection".to_string(),
                ),
                mime_type: Some(JSON_MIME.to_string()),
            },
            ResourceTemplate {
                uri_template: format!("{URI_SCHEME}documents/{{signature}}"),
                name: "Document metadata".to_string(),
                description: Some("Normalized metadata of one court decision".to_string()),
                mime_type: Some(JSON_MIME.to_string()),
            },
        ]
    }

    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let text = match ResourceUri::parse(uri)? {
            ResourceUri::Courts => to_json(&self.services.list_courts(None).await?)?,
            ResourceUri::Collection(collection) => {
                to_json(&self.services.collection_status(&collection).await?)?
            }
            ResourceUri::Document(signature) => {
                to_json(&self.services.get_metadata(&signature).await?)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents {
                uri: uri.to_string(),
                mime_type: Some(JSON_MIME.to_string()),
                text: Some(text),
                blob: None,
            }],
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    Ok(serde_json::to_string_pretty(value)?)
}
