//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};

pub struct McpServer {
    transport: StdioTransport,
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            transport: StdioTransport::new(),
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Run the MCP server until stdin closes or Ctrl+C
    pub async fn run(&mut self) -> Result<(), McpError> {
        info!(
            tools = ?self.handlers.tools().names(),
            "Starting entscheidsuche MCP server"
        );

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin).lines();

        // Spawn signal handler
        let mut shutdown = tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
        });

        // Main loop
        loop {
            tokio::select! {
                // Process stdin messages
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            self.process_and_respond(&line).await?;
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                // Handle Ctrl+C
                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        info!("MCP server shutting down");
        Ok(())
    }

    async fn process_and_respond(&mut self, line: &str) -> Result<(), McpError> {
        debug!("Received: {}", line);

        let response = match process_message(&self.handlers, line).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.code_and_message();
                JsonRpcResponse::failure(None, code, message)
            }
        };
        self.transport.send_response(response).await
    }
}

/// Parse one line and route it to its handler
///
/// Notifications other than `initialized` get an empty response, which
/// the transport never writes.
pub async fn process_message(
    handlers: &ProtocolHandlers,
    line: &str,
) -> Result<JsonRpcResponse, McpError> {
    let request: JsonRpcRequest =
        serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

    match request.method.as_str() {
        "initialize" => handlers.handle_initialize(request).await,
        "initialized" | "notifications/initialized" => handlers.handle_initialized(request).await,
        "ping" => handlers.handle_ping(request).await,
        "tools/list" => handlers.handle_tools_list(request).await,
        "tools/call" => handlers.handle_tools_call(request).await,
        "resources/list" => handlers.handle_resources_list(request).await,
        "resources/templates/list" => handlers.handle_resource_templates_list(request).await,
        "resources/read" => handlers.handle_resources_read(request).await,
        "prompts/list" => handlers.handle_prompts_list(request).await,
        "prompts/get" => handlers.handle_prompts_get(request).await,
        method if request.is_notification() => {
            debug!(method, "Ignoring notification");
            Ok(JsonRpcResponse::none())
        }
        _ => Ok(JsonRpcResponse::failure(
            request.id,
            METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )),
    }
}

// McpServer requires Services, so Default is not implemented
