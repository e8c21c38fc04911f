//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Shell used by the `execute_bash` tool.
    pub shell: ShellConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Command execution settings.
///
/// Commands are not sandboxed. The defaults reproduce a plain `sh -c`
/// invocation in the server's working directory with no time limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Shell program; `None` selects the platform shell (`sh` or `cmd`).
    pub program: Option<String>,

    /// Working directory for spawned commands.
    pub working_dir: Option<PathBuf>,

    /// Upper bound on a single command's run time, in seconds.
    pub timeout_secs: Option<u64>,
}

impl ShellConfig {
    /// The configured timeout as a `Duration`.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// One-line summary of the execution settings, for the startup log.
    pub fn describe(&self) -> String {
        let program = self.program.as_deref().unwrap_or("platform shell");
        let dir = self
            .working_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "current directory".to_string());
        let limit = match self.timeout_secs {
            Some(secs) => format!("{}s timeout", secs),
            None => "no time limit".to_string(),
        };
        format!("{} in {}, {}", program, dir, limit)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "terminal-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            shell: ShellConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SHELL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.transport = TransportConfig::from_env();

        if let Ok(program) = std::env::var("MCP_SHELL") {
            config.shell.program = Some(program);
        }

        if let Ok(dir) = std::env::var("MCP_SHELL_WORKDIR") {
            config.shell.working_dir = Some(PathBuf::from(dir));
        }

        if let Ok(raw) = std::env::var("MCP_COMMAND_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::config(format!(
                        "MCP_COMMAND_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?;
            config.shell.timeout_secs = Some(secs);
        }

        Ok(config)
    }
}
