//! Call dispatcher - validates inbound tool calls and routes them to handlers.
//!
//! The dispatcher owns nothing global: it is built with the session state and
//! the command executor it should use, and every transport funnels tool calls
//! through [`ToolDispatcher::dispatch`].

use std::sync::Arc;

use rmcp::model::{CallToolRequestParam, CallToolResult, JsonObject, Tool};
use tracing::{debug, info, instrument, warn};

use super::definitions::{
    ExecuteBashTool, GetLoggingModeTool, GetTimeTool, SayHelloTool, SetLoggingModeTool,
};
use super::error::ToolError;
use super::executor::CommandExecutor;
use super::registry::{ToolKind, ToolRegistry};
use crate::core::session::SessionState;

/// One inbound tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    /// Name of the tool to run.
    pub name: String,

    /// Unvalidated arguments; absent arguments arrive as an empty object.
    pub arguments: JsonObject,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: JsonObject) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from a JSON value; non-object arguments are treated as
    /// empty.
    pub fn from_value(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        Self::new(name, arguments)
    }
}

impl From<CallToolRequestParam> for ToolCall {
    fn from(request: CallToolRequestParam) -> Self {
        Self::new(request.name, request.arguments.unwrap_or_default())
    }
}

/// Routes tool calls to their handlers.
#[derive(Clone)]
pub struct ToolDispatcher {
    session: Arc<SessionState>,
    executor: Arc<dyn CommandExecutor>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given session and executor.
    pub fn new(session: Arc<SessionState>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self { session, executor }
    }

    /// The session state shared by all calls.
    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// The ordered tool catalog.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Run one tool call.
    ///
    /// Returns `Err` only for protocol-level failures (unknown tool, missing
    /// strictly-required argument). Operational failures come back as `Ok`
    /// text results describing what went wrong.
    #[instrument(skip_all, fields(tool = %call.name))]
    pub async fn dispatch(&self, call: ToolCall) -> Result<CallToolResult, ToolError> {
        let Some(kind) = ToolKind::from_name(&call.name) else {
            warn!("Unknown tool requested: {}", call.name);
            return Err(ToolError::unknown_tool(call.name));
        };

        if self.session.verbose_logging() {
            info!(
                "Dispatching {} with arguments {}",
                call.name,
                serde_json::Value::Object(call.arguments.clone())
            );
        } else {
            debug!("Dispatching {}", call.name);
        }

        let args = &call.arguments;
        let outcome = match kind {
            ToolKind::SayHello => SayHelloTool::execute(args),
            ToolKind::GetTime => Ok(GetTimeTool::execute()),
            ToolKind::ExecuteBash => {
                ExecuteBashTool::execute(args, self.executor.as_ref(), &self.session).await
            }
            ToolKind::SetLoggingMode => SetLoggingModeTool::execute(args, &self.session),
            ToolKind::GetLoggingMode => Ok(GetLoggingModeTool::execute(&self.session)),
        };

        let result = outcome.or_else(|failure| failure.resolve());
        if let Err(e) = &result {
            warn!("Tool call rejected: {}", e);
        } else if self.session.verbose_logging() {
            info!("Tool {} finished", call.name);
        }
        result
    }
}
