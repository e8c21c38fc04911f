//! Shell command execution for the `execute_bash` tool.
//!
//! A command string is handed to the host shell, run to completion, and its
//! captured output is returned as a [`CommandOutcome`]. Every process-level
//! failure (spawn error, non-zero exit, timeout) becomes
//! [`CommandOutcome::Failed`]; nothing here produces a protocol error.
//!
//! Execution is unrestricted: no sandbox, no output cap, no escaping.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::core::config::ShellConfig;

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command exited successfully.
    Completed { stdout: String, stderr: String },

    /// The command could not be run, exited non-zero, or timed out.
    Failed { message: String },
}

impl CommandOutcome {
    /// Render the outcome as the text returned to the caller.
    pub fn render(&self, command: &str) -> String {
        match self {
            Self::Completed { stdout, stderr } => {
                let mut text = format!("Command: {}\nOutput:\n{}", command, stdout);
                if !stderr.is_empty() {
                    text.push_str("\nError:\n");
                    text.push_str(stderr);
                }
                text
            }
            Self::Failed { message } => format!("Command: {}\nError: {}", command, message),
        }
    }

    /// Whether the command completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Something that can run a shell command.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` to completion and capture its output.
    async fn execute(&self, command: &str) -> CommandOutcome;
}

/// Runs commands through the host shell with `tokio::process`.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    program: String,
    working_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

#[cfg(windows)]
const DEFAULT_SHELL: &str = "cmd";
#[cfg(windows)]
const COMMAND_FLAG: &str = "/C";

#[cfg(not(windows))]
const DEFAULT_SHELL: &str = "sh";
#[cfg(not(windows))]
const COMMAND_FLAG: &str = "-c";

impl ShellExecutor {
    /// Create an executor using the platform shell.
    pub fn new() -> Self {
        Self {
            program: DEFAULT_SHELL.to_string(),
            working_dir: None,
            timeout: None,
        }
    }

    /// Create an executor from the shell configuration.
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            program: config
                .program
                .clone()
                .unwrap_or_else(|| DEFAULT_SHELL.to_string()),
            working_dir: config.working_dir.clone(),
            timeout: config.timeout(),
        }
    }

    /// Run commands in the given directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Kill commands that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(COMMAND_FLAG)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> CommandOutcome {
        debug!(shell = %self.program, "Spawning command");

        let mut cmd = self.command(command);
        let output = cmd.output();
        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, output).await {
                Ok(result) => result,
                Err(_) => {
                    // Dropping the future drops the child, which kills it.
                    warn!("Command timed out after {}s", limit.as_secs());
                    return CommandOutcome::Failed {
                        message: format!("Command timed out after {}s", limit.as_secs()),
                    };
                }
            },
            None => output.await,
        };

        match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

                if output.status.success() {
                    CommandOutcome::Completed { stdout, stderr }
                } else {
                    debug!(status = %output.status, "Command exited unsuccessfully");
                    CommandOutcome::Failed {
                        message: format!("Command failed: {}\n{}", command, stderr),
                    }
                }
            }
            Err(e) => {
                warn!("Failed to spawn shell '{}': {}", self.program, e);
                CommandOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
