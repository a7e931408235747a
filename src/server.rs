//! MCP server exposing the `get_module_info` tool
//!
//! Thin layer over [`ProjectFetcher`]: validates arguments, runs the fetch
//! and wraps the record (or the failure) in protocol types.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorCode, JsonObject, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde::Deserialize;

use crate::fetch::ProjectFetcher;

pub const SERVER_NAME: &str = "drupal-modules-mcp";

pub const TOOL_NAME: &str = "get_module_info";

const TOOL_DESCRIPTION: &str = "Get information about a Drupal module from drupal.org";

/// Arguments of `get_module_info`
#[derive(Debug, Deserialize)]
struct ModuleInfoRequest {
    #[serde(default)]
    module_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DrupalModulesServer {
    fetcher: Arc<ProjectFetcher>,
}

impl DrupalModulesServer {
    pub fn new(fetcher: ProjectFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    fn input_schema() -> JsonObject {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "module_name": {
                    "type": "string",
                    "description": "Machine name of the Drupal module"
                }
            },
            "required": ["module_name"]
        });

        match schema {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    /// Tools advertised by this server
    pub fn tools() -> Vec<Tool> {
        vec![Tool::new(
            TOOL_NAME,
            TOOL_DESCRIPTION,
            Arc::new(Self::input_schema()),
        )]
    }

    /// Dispatch one tool call
    ///
    /// Argument validation happens before any network access.
    pub async fn handle_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        if name != TOOL_NAME {
            tracing::error!("Unknown tool requested: {}", name);
            return Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {name}"),
                None,
            ));
        }

        let request: ModuleInfoRequest =
            serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
                .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))?;

        let module_name = match request.module_name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(McpError::invalid_params(
                    "Module name is required".to_string(),
                    None,
                ))
            }
        };

        let record = self
            .fetcher
            .fetch_module_info(&module_name)
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch module info: {e}"), None)
            })?;

        let text = record.to_pretty_json().map_err(|e| {
            McpError::internal_error(format!("JSON serialization error: {e}"), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl ServerHandler for DrupalModulesServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(Self::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            "call_tool() invoked for tool: {}, arguments: {:?}",
            request.name,
            request.arguments
        );

        let result = self.handle_call(&request.name, request.arguments).await;
        if let Err(e) = &result {
            tracing::error!("Tool call '{}' failed: {}", request.name, e.message);
        }
        result
    }

    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.into();
        info.server_info.version = env!("CARGO_PKG_VERSION").into();
        info.instructions = Some(format!(
            "Use {TOOL_NAME} with a module machine name (e.g. \"views\") to read its drupal.org project page."
        ));
        info
    }
}
