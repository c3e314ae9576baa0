//! Tool for listing pull requests

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::optional("state", ParamKind::String, "Filter by state: open, closed, or all"),
];

/// Tool for listing pull requests as `<number>: <title>` lines
#[derive(Default)]
pub struct ListPullRequestsTool;

impl ListPullRequestsTool {
    /// Creates a new instance of the ListPullRequestsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListPullRequestsTool {
    fn name(&self) -> &'static str {
        "list_pull_requests"
    }

    fn description(&self) -> &'static str {
        "List pull requests in a GitHub repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let pulls = context
            .github
            .list_pull_requests(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.optional_string("state"),
            )
            .await?;
        Ok(format_list(&pulls, "No pull requests found", |pull| {
            format!("{}: {}", pull.number, pull.title)
        }))
    }
}
