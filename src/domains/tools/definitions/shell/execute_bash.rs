//! Shell command tool definition.
//!
//! A missing command is a protocol error. Anything that goes wrong while the
//! command runs is returned to the caller as text.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::core::session::SessionState;
use crate::domains::tools::definitions::common::{MissingArgument, string_argument, text_result};
use crate::domains::tools::error::ToolFailure;
use crate::domains::tools::executor::{CommandExecutor, CommandOutcome};

/// Parameters for the shell command tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExecuteBashParams {
    #[schemars(description = "The bash command to execute", length(min = 1))]
    pub command: String,
}

/// Shell command tool - runs a command and returns its output.
pub struct ExecuteBashTool;

impl ExecuteBashTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "execute_bash";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Executes a bash command and returns the output";

    pub const COMMAND_POLICY: MissingArgument = MissingArgument::Reject;

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        args: &JsonObject,
        executor: &dyn CommandExecutor,
        session: &SessionState,
    ) -> Result<CallToolResult, ToolFailure> {
        let command = string_argument(args, Self::NAME, "command", Self::COMMAND_POLICY)?;
        let verbose = session.verbose_logging();

        if verbose {
            info!("Executing command: {}", command);
        } else {
            debug!("Executing command: {}", command);
        }

        let outcome = executor.execute(&command).await;

        if verbose {
            match &outcome {
                CommandOutcome::Completed { stdout, stderr } => info!(
                    "Command completed ({} bytes stdout, {} bytes stderr)",
                    stdout.len(),
                    stderr.len()
                ),
                CommandOutcome::Failed { message } => info!("Command failed: {}", message),
            }
        }

        let text = outcome.render(&command);
        match outcome {
            CommandOutcome::Completed { .. } => Ok(text_result(text)),
            CommandOutcome::Failed { .. } => Err(ToolFailure::recovered(text)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ExecuteBashParams>(),
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
    use crate::domains::tools::ToolError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records commands and answers with a canned outcome.
    struct FakeExecutor {
        outcome: CommandOutcome,
        seen: Mutex<Vec<String>>,
    }

    impl FakeExecutor {
        fn new(outcome: CommandOutcome) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CommandExecutor for FakeExecutor {
        async fn execute(&self, command: &str) -> CommandOutcome {
            self.seen.lock().unwrap().push(command.to_string());
            self.outcome.clone()
        }
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_completed_command() {
        let executor = FakeExecutor::new(CommandOutcome::Completed {
            stdout: "hi\n".to_string(),
            stderr: String::new(),
        });
        let session = SessionState::new();

        let args = args(json!({ "command": "echo hi" }));
        let result = ExecuteBashTool::execute(&args, &executor, &session)
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(*executor.seen.lock().unwrap(), vec!["echo hi".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_command_is_recovered() {
        let executor = FakeExecutor::new(CommandOutcome::Failed {
            message: "nope".to_string(),
        });
        let session = SessionState::new();

        let args = args(json!({ "command": "false" }));
        let failure = ExecuteBashTool::execute(&args, &executor, &session)
            .await
            .unwrap_err();
        assert_eq!(failure, ToolFailure::recovered("Command: false\nError: nope"));
    }

    #[tokio::test]
    async fn test_missing_command_is_protocol_error() {
        let executor = FakeExecutor::new(CommandOutcome::Failed {
            message: "unreachable".to_string(),
        });
        let session = SessionState::new();

        for value in [
            json!({}),
            json!({ "command": "" }),
            json!({ "command": null }),
            json!({ "command": false }),
            json!({ "command": 0 }),
        ] {
            let failure = ExecuteBashTool::execute(&args(value), &executor, &session)
                .await
                .unwrap_err();
            assert_eq!(
                failure,
                ToolFailure::Protocol(ToolError::missing_argument("execute_bash", "command"))
            );
        }
        assert!(executor.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_schema_requires_command() {
        let tool = ExecuteBashTool::to_tool();
        assert_eq!(tool.input_schema["required"], json!(["command"]));
        assert_eq!(tool.input_schema["properties"]["command"]["minLength"], 1);
    }
}
