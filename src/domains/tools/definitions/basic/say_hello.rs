//! Greeting tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::definitions::common::{MissingArgument, string_argument, text_result};
use crate::domains::tools::error::ToolFailure;

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SayHelloParams {
    #[schemars(description = "The name of the person to greet")]
    pub name: String,
}

/// Greeting tool - says hello to a person.
pub struct SayHelloTool;

impl SayHelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "say_hello";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Says hello to a person";

    /// `name` is advertised as required but a missing one is not an error.
    pub const NAME_POLICY: MissingArgument = MissingArgument::Default("World");

    pub fn execute(args: &JsonObject) -> Result<CallToolResult, ToolFailure> {
        let name = string_argument(args, Self::NAME, "name", Self::NAME_POLICY)?;
        info!("Greeting {}", name);

        Ok(text_result(format!(
            "Hello, {}! This is a greeting from the MCP server.",
            name
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SayHelloParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
