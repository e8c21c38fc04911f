//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the dispatcher.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool,
//! catalogued in `domains/tools/registry.rs`, and routed by
//! `domains/tools/dispatcher.rs`. Every transport (STDIO, TCP, HTTP) goes
//! through the same dispatcher, so **adding a new tool does NOT require
//! modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::session::SessionState;
use crate::domains::tools::{CommandExecutor, ShellExecutor, ToolCall, ToolDispatcher};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Clones share
/// the same session state, so every connection served by one process sees
/// the same logging mode.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool calls.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let executor = Arc::new(ShellExecutor::from_config(&config.shell));
        Self::with_executor(config, executor)
    }

    /// Create a server that runs commands through the given executor.
    pub fn with_executor(config: Config, executor: Arc<dyn CommandExecutor>) -> Self {
        let session = Arc::new(SessionState::new());

        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(session, executor),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool dispatcher.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Whether the session is currently in verbose mode.
    pub fn verbose_logging(&self) -> bool {
        self.dispatcher.session().verbose_logging()
    }

    /// Usage notes sent to clients on initialization.
    pub fn instructions() -> &'static str {
        "This server can greet, report the current time, execute shell commands on the host \
         (unrestricted), and switch its logging mode between 'verbose' and 'quiet'."
    }
}

/// ServerHandler implementation routing tool requests to the dispatcher.
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().into(),
                version: self.version().into(),
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
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
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
        info!("Calling tool: {}", request.name);
        self.dispatcher
            .dispatch(ToolCall::from(request))
            .await
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::LoggingMode;

    #[test]
    fn test_server_info_advertises_tools() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.instructions.unwrap().contains("verbose"));
        assert_eq!(info.server_info.name, "terminal-mcp-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_clones_share_session() {
        let server = McpServer::new(Config::default());
        let clone = server.clone();
        assert!(!clone.verbose_logging());

        server
            .dispatcher()
            .session()
            .set_logging_mode(LoggingMode::Verbose);
        assert!(clone.verbose_logging());
    }

    #[test]
    fn test_separate_servers_have_separate_sessions() {
        let a = McpServer::new(Config::default());
        let b = McpServer::new(Config::default());
        a.dispatcher().session().set_logging_mode(LoggingMode::Verbose);
        assert!(!b.verbose_logging());
    }

    #[test]
    fn test_name_and_version() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "terminal-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}
