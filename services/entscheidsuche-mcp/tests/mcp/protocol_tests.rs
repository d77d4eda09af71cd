//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use entscheidsuche_mcp::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {
                    "name": "test",
                    "version": "1.0"
                }
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "initialize");
        assert_eq!(req.jsonrpc, "2.0");
        assert!(!req.is_notification());

        let params: InitializeParams = serde_json::from_value(req.params.unwrap()).unwrap();
        assert_eq!(params.protocol_version.as_deref(), Some("2024-11-05"));
        assert_eq!(params.client_info.unwrap().name, "test");
    }

    #[test]
    fn test_request_without_id_is_notification() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/cancelled"}"#)
                .unwrap();
        assert!(req.is_notification());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_serialize_initialize_response() {
        let response = InitializeResult {
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
                version: "0.1.0".to_string(),
            },
            instructions: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["protocolVersion"], "2024-11-05");
        assert_eq!(json["serverInfo"]["name"], "entscheidsuche-mcp");
        assert_eq!(json["capabilities"]["resources"]["subscribe"], false);
        assert_eq!(json["capabilities"]["prompts"]["listChanged"], false);
        assert!(json.get("instructions").is_none());
    }

    #[test]
    fn test_success_and_failure_shapes() {
        let ok = serde_json::to_value(JsonRpcResponse::success(Some(json!(7)), json!({}))).unwrap();
        assert_eq!(ok["id"], 7);
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(JsonRpcResponse::failure(
            Some(json!("a")),
            NOT_FOUND,
            "Not found: x".to_string(),
        ))
        .unwrap();
        assert_eq!(err["error"]["code"], -32003);
        assert!(err.get("result").is_none());
    }

    #[test]
    fn test_none_response_is_empty() {
        assert!(JsonRpcResponse::none().is_empty());
        assert!(!JsonRpcResponse::success(None, json!({})).is_empty());
    }

    #[test]
    fn test_domain_error_codes() {
        assert_eq!(UPSTREAM_ERROR, -32001);
        assert_eq!(SEARCH_FAILED, -32002);
        assert_eq!(NOT_FOUND, -32003);
        assert_eq!(DOCUMENT_FETCH_FAILED, -32004);
    }

    #[test]
    fn test_tool_result_error_flag() {
        let ok = ToolResult {
            content: vec![ContentBlock::Text {
                text: "fine".to_string(),
            }],
            is_error: false,
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("isError").is_none());
        assert_eq!(json["content"][0]["type"], "text");

        let failed = serde_json::to_value(ToolResult::error("boom".to_string())).unwrap();
        assert_eq!(failed["isError"], true);
        assert_eq!(failed["content"][0]["text"], "boom");
    }

    #[test]
    fn test_resource_block_serialization() {
        let block = ContentBlock::Resource {
            resource: ResourceContents {
                uri: "https://entscheidsuche.ch/docs/CH_BGer/x.pdf".to_string(),
                mime_type: Some("application/pdf".to_string()),
                text: None,
                blob: Some("JVBERi0=".to_string()),
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "resource");
        assert_eq!(json["resource"]["mimeType"], "application/pdf");
        assert_eq!(json["resource"]["blob"], "JVBERi0=");
        assert!(json["resource"].get("text").is_none());
    }

    #[test]
    fn test_get_prompt_params_default_arguments() {
        let params: GetPromptParams =
            serde_json::from_value(json!({ "name": "legal_research" })).unwrap();
        assert!(params.arguments.is_empty());
    }
}
