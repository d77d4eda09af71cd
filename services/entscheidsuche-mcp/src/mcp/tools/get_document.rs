//! Get document tool handler
//!
//! Returns one decision as normalized metadata, raw HTML, plain text or
//! an embedded PDF.

use super::handler::{text_content, McpToolHandler};
use super::helpers::{format_bytes, parse_args, truncate_text};
use crate::core::services::{DocumentContent, FetchedDocument, Services};
use crate::core::types::DocumentFormat;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ResourceContents, ToolResult, ToolSchema};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetDocumentHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct GetDocumentArgs {
    signature: String,
    collection: Option<String>,
    format: Option<String>,
}

impl GetDocumentHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn render(&self, document: FetchedDocument) -> Result<ToolResult, McpError> {
        let max_chars = self.services.config.output.max_document_chars;
        let signature = document.target.signature;

        match document.content {
            DocumentContent::Metadata(metadata) => {
                Ok(text_content(serde_json::to_string_pretty(&metadata)?))
            }
            DocumentContent::Html(html) | DocumentContent::Text(html) => {
                Ok(text_content(truncate_text(&html, max_chars)))
            }
            DocumentContent::Pdf(bytes) => {
                let summary = format!(
                    "PDF of {signature} ({}), from {}",
                    format_bytes(bytes.len() as u64),
                    document.url
                );
                Ok(ToolResult {
                    content: vec![
                        ContentBlock::Text { text: summary },
                        ContentBlock::Resource {
                            resource: ResourceContents {
                                uri: document.url,
                                mime_type: Some(DocumentFormat::Pdf.mime_type().to_string()),
                                text: None,
                                blob: Some(BASE64.encode(&bytes)),
                            },
                        },
                    ],
                    is_error: false,
                })
            }
        }
    }
}

#[async_trait]
impl McpToolHandler for GetDocumentHandler {
    fn name(&self) -> &str {
        "get_document"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_document".to_string(),
            description: "Fetch a court decision by its signature (as returned by search). \
                         format=json (default) gives normalized metadata (case number, date, \
                         court, language, title, abstract, URLs); format=text gives the decision \
                         text; format=html the original HTML; format=pdf the PDF as an embedded \
                         resource. Long texts are truncated. The collection is looked up \
                         automatically when omitted."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "signature": {
                        "type": "string",
                        "description": "Document signature, e.g. 'CH_BGer_005_5F-23-2025_2025-07-01'",
                        "minLength": 1
                    },
                    "collection": {
                        "type": "string",
                        "description": "Owning collection (e.g. 'CH_BGer'); optional"
                    },
                    "format": {
                        "type": "string",
                        "enum": ["json", "html", "pdf", "text"],
                        "default": "json"
                    }
                },
                "required": ["signature"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetDocumentArgs = parse_args(args)?;
        let format = match args.format.as_deref() {
            Some(f) => f.parse::<DocumentFormat>()?,
            None => DocumentFormat::default(),
        };

        let document = self
            .services
            .get_document(&args.signature, args.collection.as_deref(), format)
            .await?;

        self.render(document)
    }
}
