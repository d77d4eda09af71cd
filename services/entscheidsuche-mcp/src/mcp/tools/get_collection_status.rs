//! Get collection status tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::parse_args;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetCollectionStatusHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct CollectionArgs {
    collection: String,
}

impl GetCollectionStatusHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetCollectionStatusHandler {
    fn name(&self) -> &str {
        "get_collection_status"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_collection_status".to_string(),
            description: "Show when a court collection was last scraped, how many decisions it \
                         holds and which job type ran. Use it to judge how current search \
                         results for a court are."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "collection": {
                        "type": "string",
                        "description": "Collection name, e.g. 'CH_BGer' or 'ZH_Obergericht'",
                        "minLength": 1
                    }
                },
                "required": ["collection"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: CollectionArgs = parse_args(args)?;
        let status = self.services.collection_status(&args.collection).await?;
        Ok(text_content(serde_json::to_string_pretty(&status)?))
    }
}
