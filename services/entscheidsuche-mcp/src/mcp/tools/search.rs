//! Search tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::{optional_int, parse_args};
use crate::core::services::Services;
use crate::core::types::{SearchHit, SearchQuery};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default, deserialize_with = "optional_int")]
    size: Option<i64>,
    #[serde(default, deserialize_with = "optional_int")]
    from: Option<i64>,
    sort: Option<String>,
}

/// Payload returned to the client
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload<'a> {
    query: &'a str,
    total_results: u64,
    from: usize,
    size: usize,
    results: &'a [SearchHit],
}

impl SearchHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchHandler {
    fn name(&self) -> &str {
        "search"
    }

    fn schema(&self) -> ToolSchema {
        let limits = &self.services.config.search;
        ToolSchema {
            name: "search".to_string(),
            description: "Search Swiss court decisions (federal and cantonal) on entscheidsuche.ch. \
                         Plain keywords match all terms; Lucene syntax is supported \
                         (\"exact phrase\", AND/OR/NOT, field:value, wildcards). \
                         Decisions are in German, French and Italian, so search in the \
                         language of the expected decisions. Returns JSON with totalResults \
                         and normalized hits (signature, court, canton, date, title, abstract, \
                         reference, htmlUrl, pdfUrl)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query, e.g. 'Urheberrecht', '\"fristlose Kündigung\"', \
                                        'Mietrecht AND canton:ZH'",
                        "minLength": 1
                    },
                    "size": {
                        "type": "integer",
                        "description": format!("Number of results (default {}, max {})", limits.default_size, limits.max_size),
                        "default": limits.default_size,
                        "minimum": 1,
                        "maximum": limits.max_size
                    },
                    "from": {
                        "type": "integer",
                        "description": "Offset for pagination (default 0)",
                        "default": 0,
                        "minimum": 0
                    },
                    "sort": {
                        "type": "string",
                        "description": "Sort as 'field' or 'field:asc|desc' (default direction desc), e.g. 'date:desc'"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SearchArgs = parse_args(args)?;

        let (query, page) = self
            .services
            .search(&args.query, args.size, args.from, args.sort.as_deref())
            .await?;

        Ok(text_content(format_results(&query, page.total, &page.hits)?))
    }
}

fn format_results(query: &SearchQuery, total: u64, hits: &[SearchHit]) -> Result<String, McpError> {
    let payload = SearchPayload {
        query: &query.text,
        total_results: total,
        from: query.from,
        size: query.size,
        results: hits,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}
