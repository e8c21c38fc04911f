//! Common utilities shared across tool definitions.
//!
//! Argument extraction lives here so that every tool states how it treats a
//! missing argument instead of relying on its schema's `required` list.

use std::borrow::Cow;

use rmcp::model::{CallToolResult, Content, JsonObject};

use crate::domains::tools::error::{ToolError, ToolFailure};

/// What a tool does when one of its arguments is absent, null or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingArgument {
    /// Fail the call with a protocol error.
    Reject,

    /// Substitute the given value.
    Default(&'static str),

    /// Report the given text as a recovered error.
    Report(&'static str),
}

/// Create a success result with a single text block.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Read a string-like argument, applying the tool's missing-argument policy.
///
/// Absent, null, `""`, `false` and zero all count as missing. Other scalars
/// are rendered with their JSON text. Arrays and objects are rendered the same
/// way, except under `Report`, where they are reported like a missing value.
pub fn string_argument<'a>(
    args: &'a JsonObject,
    tool: &'static str,
    name: &'static str,
    policy: MissingArgument,
) -> Result<Cow<'a, str>, ToolFailure> {
    use serde_json::Value;

    let value = match args.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => (!s.is_empty()).then_some(Cow::Borrowed(s.as_str())),
        Some(Value::Bool(b)) => b.then_some(Cow::Borrowed("true")),
        Some(Value::Number(n)) => (n.as_f64() != Some(0.0)).then(|| Cow::Owned(n.to_string())),
        Some(v @ (Value::Array(_) | Value::Object(_))) => match policy {
            MissingArgument::Report(text) => return Err(ToolFailure::recovered(text)),
            _ => Some(Cow::Owned(v.to_string())),
        },
    };

    match (value, policy) {
        (Some(v), _) => Ok(v),
        (None, MissingArgument::Reject) => Err(ToolError::missing_argument(tool, name).into()),
        (None, MissingArgument::Default(default)) => Ok(Cow::Borrowed(default)),
        (None, MissingArgument::Report(text)) => Err(ToolFailure::recovered(text)),
    }
}
