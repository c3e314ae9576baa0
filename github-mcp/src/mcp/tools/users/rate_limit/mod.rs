//! Tool for reporting API quota

use crate::error::Result;
use crate::mcp::shared_utils::format_unix_timestamp;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

/// Tool for showing remaining API quota per resource
#[derive(Default)]
pub struct GetRateLimitTool;

impl GetRateLimitTool {
    /// Creates a new instance of the GetRateLimitTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetRateLimitTool {
    fn name(&self) -> &'static str {
        "get_rate_limit"
    }

    fn description(&self) -> &'static str {
        "Get the current API rate limit status"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        &[]
    }

    async fn execute(&self, _arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let rate_limit = context.github.get_rate_limit().await?;
        if rate_limit.resources.is_empty() {
            return Ok("No rate limits found".to_string());
        }

        Ok(rate_limit
            .resources
            .iter()
            .map(|(resource, bucket)| {
                format!(
                    "{}: {}/{} remaining, resets at {}",
                    resource,
                    bucket.remaining,
                    bucket.limit,
                    format_unix_timestamp(bucket.reset)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
