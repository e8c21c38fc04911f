//! Per-process session state.
//!
//! The server keeps a single mutable record for the lifetime of the process:
//! the logging mode selected by the `set_logging_mode` tool. It is owned by
//! the server and handed to the dispatcher through an `Arc`, never stored in
//! a global. Reads and writes go through an `RwLock` so that transports which
//! deliver calls concurrently (TCP, HTTP) cannot observe a torn value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Verbosity of the server's responses and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingMode {
    /// Detailed process steps are logged.
    Verbose,

    /// Only final answers; the initial mode of every process.
    #[default]
    Quiet,
}

impl LoggingMode {
    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Quiet => "quiet",
        }
    }

    /// Parse an exact wire name. Anything else (including different casing)
    /// is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "verbose" => Some(Self::Verbose),
            "quiet" => Some(Self::Quiet),
            _ => None,
        }
    }

    /// Effect description used when the mode has just been set.
    pub fn effect_after_set(self) -> &'static str {
        match self {
            Self::Verbose => "Will show detailed process steps.",
            Self::Quiet => "Will return only final answers.",
        }
    }

    /// Effect description used when reporting the current mode.
    pub fn current_effect(self) -> &'static str {
        match self {
            Self::Verbose => "Showing detailed process steps.",
            Self::Quiet => "Returning only final answers.",
        }
    }
}

impl fmt::Display for LoggingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable state shared by every call handled by one server process.
#[derive(Debug, Default)]
pub struct SessionState {
    mode: RwLock<LoggingMode>,
}

impl SessionState {
    /// Create a fresh session in quiet mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logging mode.
    pub fn logging_mode(&self) -> LoggingMode {
        // The guarded value is a plain Copy enum, so a poisoned lock still
        // holds a valid mode.
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the logging mode, returning the previous one.
    pub fn set_logging_mode(&self, mode: LoggingMode) -> LoggingMode {
        let mut guard = self.mode.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, mode)
    }

    /// Whether detailed process steps should be logged.
    pub fn verbose_logging(&self) -> bool {
        self.logging_mode() == LoggingMode::Verbose
    }
}
