//! Info command - show version and server information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::mcp::protocol::PROTOCOL_VERSION;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Number of tools the MCP server registers
const TOOL_COUNT: u32 = 6;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show upstream settings as well
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub tools: u32,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval_ms: Option<u64>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let info = InfoResponse {
        name: "entscheidsuche-mcp".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: format!("MCP {PROTOCOL_VERSION}"),
        tools: TOOL_COUNT,
        base_url: config.upstream.base().to_string(),
        dialect: args
            .detailed
            .then(|| config.upstream.dialect.as_str().to_string()),
        min_interval_ms: args.detailed.then_some(config.rate_limit.min_interval_ms),
    };

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("Protocol: {}", info.protocol);
            println!("Tools: {}", info.tools);
            println!("Upstream: {}", info.base_url);
            if let Some(dialect) = &info.dialect {
                println!("Dialect: {dialect}");
            }
            if let Some(ms) = info.min_interval_ms {
                println!("Min request interval: {ms}ms");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
