//! Terminal MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes a
//! small, fixed set of tools to a remote (usually LLM-driven) client:
//! a greeting, the current time, unrestricted shell command execution, and a
//! session-wide logging mode that can be read and switched.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, session state, the rmcp server handler
//!   and the transports
//! - **domains::tools**: tool definitions, the ordered registry, the call
//!   dispatcher and the shell executor
//!
//! # Example
//!
//! ```rust,no_run
//! use terminal_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
