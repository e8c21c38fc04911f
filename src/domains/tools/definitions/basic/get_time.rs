//! Clock tool definition.

use chrono::{DateTime, SecondsFormat, Utc};
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::text_result;

/// The clock tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTimeParams {}

/// Clock tool - reports the current time.
pub struct GetTimeTool;

impl GetTimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_time";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets the current time";

    /// Arguments are ignored.
    pub fn execute() -> CallToolResult {
        text_result(format!("Current time: {}", format_timestamp(Utc::now())))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTimeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-01-01T12:00:00.000Z`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rmcp::model::RawContent;

    #[test]
    fn test_format_timestamp() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(instant), "2025-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_reports_now() {
        let before = Utc::now();
        let result = GetTimeTool::execute();

        let text = match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        };
        let stamp = text.strip_prefix("Current time: ").unwrap();
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();

        let delta = parsed.with_timezone(&Utc) - before;
        assert!(delta.num_seconds().abs() < 5);
    }

    #[test]
    fn test_schema_has_no_required_fields() {
        let tool = GetTimeTool::to_tool();
        assert!(
            tool.input_schema
                .get("required")
                .and_then(|r| r.as_array())
                .is_none_or(|r| r.is_empty())
        );
    }
}
