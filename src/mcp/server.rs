// file: src/mcp/server.rs
// description: MCP stdio server exposing the blog tools
// reference: https://docs.rs/rmcp

use crate::mcp::dispatcher::{self, ToolDispatcher};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::transport::stdio;
use rmcp::{ErrorData as McpError, ServerHandler, ServiceExt};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct BlogMcpServer {
    dispatcher: Arc<ToolDispatcher>,
}

impl BlogMcpServer {
    pub fn new(dispatcher: Arc<ToolDispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Advertised tool list, converted from the transport-neutral descriptors.
pub fn rmcp_tools() -> Vec<Tool> {
    dispatcher::descriptors()
        .into_iter()
        .map(|d| Tool::new(d.name, d.description, Arc::new(as_json_object(d.input_schema))))
        .collect()
}

fn as_json_object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

impl ServerHandler for BlogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Blog MCP Server - publishes Markdown posts to a git-backed static site and \
                 pushes them to GitHub."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: rmcp_tools(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let text = self.dispatcher.dispatch(&request.name, &arguments).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

/// Run the server over stdin/stdout until the client disconnects.
pub async fn serve_stdio(dispatcher: Arc<ToolDispatcher>) -> anyhow::Result<()> {
    info!("MCP stdio transport ready");
    let service = BlogMcpServer::new(dispatcher).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmcp_tool_conversion() {
        let tools = rmcp_tools();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name, dispatcher::CREATE_BLOG_POST);
        assert!(tools[0].input_schema.contains_key("properties"));
    }
}
