//! Tool-specific error types.
//!
//! Tool calls fail in one of two ways:
//!
//! - a **protocol** failure terminates the call with an error response
//!   (`ToolError`), for caller bugs such as an unknown tool name;
//! - a **recovered** failure is reported as ordinary text content so the
//!   calling agent can read it and decide what to do next.
//!
//! Handlers return `ToolFailure` so the class of every failure is chosen at
//! the point where it is raised, and the dispatcher resolves it in one place.

use rmcp::{ErrorData as McpError, model::CallToolResult};
use thiserror::Error;

use super::definitions::common::text_result;

/// JSON-RPC "invalid params" error code.
pub const INVALID_PARAMS: i32 = -32602;

/// JSON-RPC "internal error" error code.
pub const INTERNAL_ERROR: i32 = -32603;

/// Errors that end a tool call with a protocol-level error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A strictly-validated argument was absent or empty.
    #[error("Missing required argument '{argument}' for tool '{tool}'")]
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(tool: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument { tool, argument }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// JSON-RPC error code reported for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::UnknownTool(_) | Self::MissingArgument { .. } => INVALID_PARAMS,
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::Internal(_) => McpError::internal_error(err.to_string(), None),
            _ => McpError::invalid_params(err.to_string(), None),
        }
    }
}

/// How a handler failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolFailure {
    /// Propagated to the transport as an error response.
    Protocol(ToolError),

    /// Returned to the caller as a plain text result.
    Recovered(String),
}

impl ToolFailure {
    /// Create a recovered failure with the given user-facing text.
    pub fn recovered(text: impl Into<String>) -> Self {
        Self::Recovered(text.into())
    }

    /// Resolve the failure into what the dispatcher hands back: recovered
    /// failures become successful text results, protocol failures stay errors.
    pub fn resolve(self) -> Result<CallToolResult, ToolError> {
        match self {
            Self::Protocol(err) => Err(err),
            Self::Recovered(text) => Ok(text_result(text)),
        }
    }
}

impl From<ToolError> for ToolFailure {
    fn from(err: ToolError) -> Self {
        Self::Protocol(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_recovered_resolves_to_text() {
        let result = ToolFailure::recovered("Error: nope").resolve().unwrap();
        assert_ne!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Error: nope"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_protocol_resolves_to_error() {
        let failure: ToolFailure = ToolError::missing_argument("execute_bash", "command").into();
        assert_eq!(
            failure.resolve().unwrap_err(),
            ToolError::missing_argument("execute_bash", "command")
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ToolError::unknown_tool("x").code(), INVALID_PARAMS);
        assert_eq!(
            ToolError::missing_argument("execute_bash", "command").code(),
            INVALID_PARAMS
        );
        assert_eq!(ToolError::internal("x").code(), INTERNAL_ERROR);
    }

    #[test]
    fn test_missing_argument_message() {
        let err = ToolError::missing_argument("execute_bash", "command");
        assert_eq!(
            err.to_string(),
            "Missing required argument 'command' for tool 'execute_bash'"
        );
    }

    #[test]
    fn test_into_mcp_error() {
        let err: McpError = ToolError::unknown_tool("nope").into();
        assert!(err.message.contains("Unknown tool: nope"));
    }
}
