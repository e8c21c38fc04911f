//! Logging mode getter tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::session::SessionState;
use crate::domains::tools::definitions::common::text_result;

/// The logging mode getter takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetLoggingModeParams {}

/// Logging mode getter - reports the session's current mode.
pub struct GetLoggingModeTool;

impl GetLoggingModeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_logging_mode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current logging mode setting";

    pub fn execute(session: &SessionState) -> CallToolResult {
        let mode = session.logging_mode();
        text_result(format!(
            "Current logging mode: {}. {}",
            mode,
            mode.current_effect()
        ))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetLoggingModeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::LoggingMode;
    use rmcp::model::RawContent;

    fn text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_reports_quiet_by_default() {
        let session = SessionState::new();
        assert_eq!(
            text(&GetLoggingModeTool::execute(&session)),
            "Current logging mode: quiet. Returning only final answers."
        );
    }

    #[test]
    fn test_reports_verbose() {
        let session = SessionState::new();
        session.set_logging_mode(LoggingMode::Verbose);
        assert_eq!(
            text(&GetLoggingModeTool::execute(&session)),
            "Current logging mode: verbose. Showing detailed process steps."
        );
        // Reading does not change anything.
        assert!(session.verbose_logging());
    }
}
