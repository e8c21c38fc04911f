//! Tool Registry - the static catalog of every tool this server offers.
//!
//! The catalog order is the declaration order below and never changes during
//! the life of the process; clients may rely on it for display.

use rmcp::model::Tool;

use super::definitions::{
    ExecuteBashTool, GetLoggingModeTool, GetTimeTool, SayHelloTool, SetLoggingModeTool,
};

// ============================================================================
// Tool Kinds
// ============================================================================

/// Every registered tool, used by the dispatcher to route calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    SayHello,
    GetTime,
    ExecuteBash,
    SetLoggingMode,
    GetLoggingMode,
}

impl ToolKind {
    /// All tools in catalog order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::SayHello,
        ToolKind::GetTime,
        ToolKind::ExecuteBash,
        ToolKind::SetLoggingMode,
        ToolKind::GetLoggingMode,
    ];

    /// Name the tool is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Self::SayHello => SayHelloTool::NAME,
            Self::GetTime => GetTimeTool::NAME,
            Self::ExecuteBash => ExecuteBashTool::NAME,
            Self::SetLoggingMode => SetLoggingModeTool::NAME,
            Self::GetLoggingMode => GetLoggingModeTool::NAME,
        }
    }

    /// Look a tool up by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Tool metadata advertised to clients.
    pub fn to_tool(self) -> Tool {
        match self {
            Self::SayHello => SayHelloTool::to_tool(),
            Self::GetTime => GetTimeTool::to_tool(),
            Self::ExecuteBash => ExecuteBashTool::to_tool(),
            Self::SetLoggingMode => SetLoggingModeTool::to_tool(),
            Self::GetLoggingMode => GetLoggingModeTool::to_tool(),
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - read-only view over the catalog.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, in catalog order.
    pub fn tool_names() -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Get all tools as Tool models (metadata), in catalog order.
    ///
    /// This is the single source of truth for all available tools; every
    /// transport lists tools through it.
    pub fn get_all_tools() -> Vec<Tool> {
        ToolKind::ALL.iter().map(|kind| kind.to_tool()).collect()
    }

    /// Whether a tool with the given name is registered.
    pub fn contains(name: &str) -> bool {
        ToolKind::from_name(name).is_some()
    }
}
