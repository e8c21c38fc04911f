//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Ordered tool catalog and name lookup
//! - `dispatcher.rs` - Routes calls to handlers and applies the error policy
//! - `executor.rs` - Runs shell commands for `execute_bash`
//! - `error.rs` - Protocol errors and recovered failures
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with `NAME`, `DESCRIPTION`,
//!    a params struct for the schema, `execute()` and `to_tool()`
//! 2. Export in `definitions/mod.rs`
//! 3. Add a `ToolKind` variant in `registry.rs`
//! 4. Route the variant in `ToolDispatcher::dispatch`

pub mod definitions;
pub mod dispatcher;
mod error;
pub mod executor;
mod registry;

pub use dispatcher::{ToolCall, ToolDispatcher};
pub use error::{INTERNAL_ERROR, INVALID_PARAMS, ToolError, ToolFailure};
pub use executor::{CommandExecutor, CommandOutcome, ShellExecutor};
pub use registry::{ToolKind, ToolRegistry};
