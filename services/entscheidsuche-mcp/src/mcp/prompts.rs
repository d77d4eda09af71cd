//! MCP prompt listing and rendering over the core templates

use crate::core::prompts::{render_prompt, PROMPTS};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{
    ContentBlock, GetPromptParams, GetPromptResult, PromptArgument, PromptDescriptor,
    PromptMessage,
};

/// Descriptors for prompts/list
pub fn list_prompts() -> Vec<PromptDescriptor> {
    PROMPTS
        .iter()
        .map(|spec| PromptDescriptor {
            name: spec.name.to_string(),
            description: Some(spec.description.to_string()),
            arguments: spec
                .arguments
                .iter()
                .map(|arg| PromptArgument {
                    name: arg.name.to_string(),
                    description: Some(arg.description.to_string()),
                    required: arg.required,
                })
                .collect(),
        })
        .collect()
}

/// Render a prompt as a single user message
pub fn get_prompt(params: &GetPromptParams) -> Result<GetPromptResult, McpError> {
    let rendered = render_prompt(&params.name, &params.arguments)?;
    Ok(GetPromptResult {
        description: Some(rendered.description),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ContentBlock::Text {
                text: rendered.text,
            },
        }],
    })
}
