//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::prompts::{get_prompt, list_prompts};
use crate::mcp::protocol::*;
use crate::mcp::resources::ResourceRegistry;
use crate::mcp::tools::{
    GetCollectionStatusHandler, GetDocumentHandler, GetDocumentUrlsHandler, GetServerInfoHandler,
    ListCourtsHandler, SearchHandler, ToolRegistry,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

const SERVER_INSTRUCTIONS: &str = "Search and read Swiss court decisions from entscheidsuche.ch. \
    Start with `search`, then open hits with `get_document` using their signature. \
    Upstream requests are rate limited, so prefer fewer, more specific queries.";

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
    resources: ResourceRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        // Register all available tools
        registry.register(Arc::new(SearchHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetDocumentHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ListCourtsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetDocumentUrlsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetCollectionStatusHandler::new(Arc::clone(
            &services,
        ))));
        registry.register(Arc::new(GetServerInfoHandler::new(Arc::clone(
            &services.config,
        ))));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
            resources: ResourceRegistry::new(services),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params.clone() {
            Some(Value::Null) | None => InitializeParams::default(),
            Some(v) => match parse_params(Some(v)) {
                Ok(p) => p,
                Err(e) => {
                    let (code, message) = e.code_and_message();
                    return Ok(JsonRpcResponse::failure(request.id, code, message));
                }
            },
        };

        info!(
            client = params.client_info.as_ref().map(|c| c.name.as_str()).unwrap_or("unknown"),
            protocol = params.protocol_version.as_deref().unwrap_or("unspecified"),
            "Client initialized"
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
                resources: ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                },
                prompts: PromptsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "entscheidsuche-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Initialized is a notification, no response needed
        Ok(JsonRpcResponse::none())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(JsonRpcResponse::success(request.id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    ///
    /// Unknown tools and malformed params are protocol errors; anything
    /// that goes wrong inside a tool comes back as an `isError` result.
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: ToolCallParams = match parse_params(request.params.clone()) {
            Ok(p) => p,
            Err(e) => {
                let (code, message) = e.code_and_message();
                return Ok(JsonRpcResponse::failure(request.id, code, message));
            }
        };

        // Get tool handler from registry
        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(JsonRpcResponse::failure(
                    request.id,
                    INVALID_PARAMS,
                    format!("Tool not found: {}", params.name),
                ));
            }
        };

        let result = match handler.execute(params.arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool call failed");
                ToolResult::error(e.tool_message())
            }
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle resources/list request
    pub async fn handle_resources_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let resources = self.resources.list();
        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "resources": resources }),
        ))
    }

    /// Handle resources/templates/list request
    pub async fn handle_resource_templates_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let templates = self.resources.templates();
        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "resourceTemplates": templates }),
        ))
    }

    /// Handle resources/read request
    pub async fn handle_resources_read(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let outcome = match parse_params::<ReadResourceParams>(request.params.clone()) {
            Ok(params) => self.resources.read(&params.uri).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                warn!(error = %e, "Resource read failed");
                let (code, message) = e.code_and_message();
                Ok(JsonRpcResponse::failure(request.id, code, message))
            }
        }
    }

    /// Handle prompts/list request
    pub async fn handle_prompts_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "prompts": list_prompts() }),
        ))
    }

    /// Handle prompts/get request
    pub async fn handle_prompts_get(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let outcome = parse_params::<GetPromptParams>(request.params.clone())
            .and_then(|params| get_prompt(&params));

        match outcome {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                let (code, message) = e.code_and_message();
                Ok(JsonRpcResponse::failure(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, McpError> {
    let params = params.ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| McpError::InvalidParams(format!("Invalid params: {e}")))
}

// ProtocolHandlers requires Services, so Default is not implemented
