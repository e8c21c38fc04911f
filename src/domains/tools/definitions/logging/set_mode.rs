//! Logging mode setter tool definition.
//!
//! A missing or unrecognised mode is reported back as text rather than as a
//! protocol error, and leaves the session untouched.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::core::session::{LoggingMode, SessionState};
use crate::domains::tools::definitions::common::{MissingArgument, string_argument, text_result};
use crate::domains::tools::error::ToolFailure;

/// Text returned when the mode argument is missing or invalid.
pub const INVALID_MODE_MESSAGE: &str = "Error: Mode must be either 'verbose' or 'quiet'";

/// Parameters for the logging mode setter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetLoggingModeParams {
    #[schemars(
        description = "Logging mode: 'verbose' shows detailed process steps, 'quiet' returns only final answers",
        extend("enum" = ["verbose", "quiet"])
    )]
    pub mode: String,
}

/// Logging mode setter - switches the session between verbose and quiet.
pub struct SetLoggingModeTool;

impl SetLoggingModeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "set_logging_mode";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Control the verbosity of responses - choose between verbose logging or concise answers";

    pub const MODE_POLICY: MissingArgument = MissingArgument::Report(INVALID_MODE_MESSAGE);

    pub fn execute(
        args: &JsonObject,
        session: &SessionState,
    ) -> Result<CallToolResult, ToolFailure> {
        let raw = string_argument(args, Self::NAME, "mode", Self::MODE_POLICY)?;
        let mode = LoggingMode::parse(&raw)
            .ok_or_else(|| ToolFailure::recovered(INVALID_MODE_MESSAGE))?;

        let previous = session.set_logging_mode(mode);
        info!("Logging mode changed: {} -> {}", previous, mode);

        Ok(text_result(format!(
            "Logging mode set to: {}. {}",
            mode,
            mode.effect_after_set()
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SetLoggingModeParams>(),
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
    use rmcp::model::RawContent;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_set_verbose() {
        let session = SessionState::new();
        let result = SetLoggingModeTool::execute(&args(json!({ "mode": "verbose" })), &session)
            .unwrap();
        assert_eq!(
            text(&result),
            "Logging mode set to: verbose. Will show detailed process steps."
        );
        assert!(session.verbose_logging());
    }

    #[test]
    fn test_set_quiet() {
        let session = SessionState::new();
        session.set_logging_mode(LoggingMode::Verbose);
        let result =
            SetLoggingModeTool::execute(&args(json!({ "mode": "quiet" })), &session).unwrap();
        assert_eq!(
            text(&result),
            "Logging mode set to: quiet. Will return only final answers."
        );
        assert!(!session.verbose_logging());
    }

    #[test]
    fn test_invalid_mode_is_recovered_and_keeps_state() {
        let session = SessionState::new();
        session.set_logging_mode(LoggingMode::Verbose);

        let failure =
            SetLoggingModeTool::execute(&args(json!({ "mode": "loud" })), &session).unwrap_err();
        assert_eq!(failure, ToolFailure::recovered(INVALID_MODE_MESSAGE));
        assert_eq!(session.logging_mode(), LoggingMode::Verbose);
    }

    #[test]
    fn test_missing_mode_is_recovered() {
        let session = SessionState::new();
        let failure = SetLoggingModeTool::execute(&JsonObject::new(), &session).unwrap_err();
        assert_eq!(failure, ToolFailure::recovered(INVALID_MODE_MESSAGE));
        assert_eq!(session.logging_mode(), LoggingMode::Quiet);
    }

    #[test]
    fn test_structured_mode_is_recovered() {
        let session = SessionState::new();
        for value in [json!(["verbose"]), json!({ "x": 1 }), json!(false), json!(0)] {
            let args = args(json!({ "mode": value }));
            let failure = SetLoggingModeTool::execute(&args, &session).unwrap_err();
            assert_eq!(failure, ToolFailure::recovered(INVALID_MODE_MESSAGE));
        }
        assert_eq!(session.logging_mode(), LoggingMode::Quiet);
    }

    #[test]
    fn test_schema_enumerates_modes() {
        let tool = SetLoggingModeTool::to_tool();
        assert_eq!(
            tool.input_schema["properties"]["mode"]["enum"],
            json!(["verbose", "quiet"])
        );
        assert_eq!(tool.input_schema["required"], json!(["mode"]));
    }
}
