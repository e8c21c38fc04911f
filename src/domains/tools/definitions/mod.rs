//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod basic;
pub mod common;
pub mod logging;
pub mod shell;

pub use basic::{GetTimeParams, GetTimeTool, SayHelloParams, SayHelloTool};
pub use logging::{
    GetLoggingModeParams, GetLoggingModeTool, SetLoggingModeParams, SetLoggingModeTool,
};
pub use shell::{ExecuteBashParams, ExecuteBashTool};
