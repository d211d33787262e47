//! MCP Server implementation and lifecycle management.
//!
//! The handler is deliberately thin: listing delegates to the dispatcher's
//! advertised tool set, and calls hand the raw argument object straight to
//! the dispatcher. Every call answers with a text content block; tool-level
//! failures are already folded into `{"error": ...}` payloads, so the MCP
//! layer never sees a hard error for a bad tool call.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::api::MilkeeApi;
use crate::domains::tools::{Dispatcher, ToolRegistry};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher (registry + read-only gate).
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let api = Arc::new(MilkeeApi::new(&config.credentials));
        let registry = ToolRegistry::new(api);
        let dispatcher = Arc::new(Dispatcher::new(registry, config.read_only));

        Self { config, dispatcher }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Access the dispatcher (for tests and alternative transports).
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mode = if self.config.read_only {
            " Running in read-only mode: only list/get tools are available."
        } else {
            ""
        };
        ServerInfo {
            instructions: Some(format!(
                "MCP server for the MILKEE accounting platform. Exposes customers, \
                 projects, tasks, time tracking, bookkeeping, invoicing, and proposals \
                 as tools.{mode}"
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.dispatcher.advertised_tools();
        info!(count = tools.len(), "Listing tools");
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        let text = self.dispatcher.handle(&request.name, args).await;
        Ok(CallToolResult {
            content: vec![Content::text(text)],
            structured_content: None,
            is_error: Some(false),
            meta: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CredentialsConfig, LoggingConfig, ServerConfig};

    fn test_config(read_only: bool) -> Config {
        Config {
            server: ServerConfig {
                name: "milkee-mcp".to_string(),
                version: "0.0.0-test".to_string(),
            },
            credentials: CredentialsConfig {
                api_token: "tok".to_string(),
                company_id: "1".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            read_only,
        }
    }

    #[test]
    fn test_server_advertises_tools_capability() {
        let server = McpServer::new(test_config(false));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(server.name(), "milkee-mcp");
    }

    #[test]
    fn test_read_only_server_advertises_fewer_tools() {
        let full = McpServer::new(test_config(false));
        let gated = McpServer::new(test_config(true));
        let all = full.dispatcher().advertised_tools().len();
        let read_only = gated.dispatcher().advertised_tools().len();
        assert_eq!(all, 74);
        assert!(read_only < all);
    }
}
