//! List courts tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::parse_args;
use crate::core::services::Services;
use crate::core::types::CourtsByCanton;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListCourtsHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct ListCourtsArgs {
    canton: Option<String>,
}

impl ListCourtsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

/// Markdown listing grouped by canton
pub fn format_courts(courts: &CourtsByCanton, canton: Option<&str>) -> String {
    if courts.is_empty() {
        return match canton {
            Some(c) => format!(
                "No courts found for canton '{c}'. Use a canton code (e.g. ZH, BE, GE) \
                 or call list_courts without a canton to see all."
            ),
            None => "No courts found on the status page.".to_string(),
        };
    }

    let mut output = String::from("# Courts by Canton\n\n");
    output.push_str(&format!(
        "{} courts in {} sections\n\n",
        courts.court_count(),
        courts.cantons.len()
    ));

    for entry in &courts.cantons {
        output.push_str(&format!("## {}\n", entry.canton));
        for court in &entry.courts {
            output.push_str(&format!("- {court}\n"));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

#[async_trait]
impl McpToolHandler for ListCourtsHandler {
    fn name(&self) -> &str {
        "list_courts"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_courts".to_string(),
            description: "List the courts covered by entscheidsuche.ch, grouped by canton. \
                         Optionally restrict to one canton by code (ZH) or name (Zürich)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "canton": {
                        "type": "string",
                        "description": "Canton code or name, e.g. 'ZH' or 'Bern'"
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ListCourtsArgs = parse_args(args)?;
        let canton = args.canton.as_deref().map(str::trim).filter(|c| !c.is_empty());

        let courts = self.services.list_courts(canton).await?;
        Ok(text_content(format_courts(&courts, canton)))
    }
}
