//! Get document URLs tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::parse_args;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetDocumentUrlsHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct GetDocumentUrlsArgs {
    signature: String,
}

impl GetDocumentUrlsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetDocumentUrlsHandler {
    fn name(&self) -> &str {
        "get_document_urls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_document_urls".to_string(),
            description: "Get direct links to a decision: JSON metadata, HTML and PDF renditions \
                         in the entscheidsuche.ch store, and the court's original source page. \
                         Missing renditions are null."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "signature": {
                        "type": "string",
                        "description": "Document signature, e.g. 'CH_BGer_005_5F-23-2025_2025-07-01'",
                        "minLength": 1
                    }
                },
                "required": ["signature"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetDocumentUrlsArgs = parse_args(args)?;
        let urls = self.services.get_document_urls(&args.signature).await?;
        Ok(text_content(serde_json::to_string_pretty(&urls)?))
    }
}
