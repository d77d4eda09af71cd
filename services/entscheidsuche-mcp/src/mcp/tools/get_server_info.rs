//! Get server info tool handler
//!
//! Returns version and upstream settings of the running server.

use super::handler::{text_content, McpToolHandler};
use crate::core::config::Config;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetServerInfoHandler {
    config: Arc<Config>,
}

impl GetServerInfoHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let upstream = &self.config.upstream;

        let mut output = String::from("# Entscheidsuche MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** entscheidsuche-mcp\n");
        output.push_str("- **Description:** Swiss court decision search via entscheidsuche.ch\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Upstream\n");
        output.push_str(&format!("- **Base URL:** {}\n", upstream.base()));
        output.push_str(&format!("- **Search Dialect:** {}\n", upstream.dialect.as_str()));
        output.push_str(&format!(
            "- **Min Request Interval:** {}ms\n",
            self.config.rate_limit.min_interval_ms
        ));
        output.push_str(&format!(
            "- **Results per Search:** default {}, max {}\n\n",
            self.config.search.default_size, self.config.search.max_size
        ));

        output.push_str("## Available Tools\n");
        output.push_str("- search: Search court decisions\n");
        output.push_str("- get_document: Fetch a decision (json, text, html, pdf)\n");
        output.push_str("- list_courts: List courts by canton\n");
        output.push_str("- get_document_urls: Links to all renditions of a decision\n");
        output.push_str("- get_collection_status: Scraper status of a collection\n");
        output.push_str("- get_server_info: Show server version (this tool)\n");

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version and upstream settings of the running entscheidsuche-mcp \
                         server. Returns server version, protocol version, upstream base URL, \
                         search dialect and available tools. No upstream request is made."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let text = self.format_info();
        Ok(text_content(text))
    }
}
