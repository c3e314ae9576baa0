//! Tool for listing issues

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

/// Tool for listing a repository's issues as `<number>: <title>` lines
#[derive(Default)]
pub struct ListIssuesTool;

impl ListIssuesTool {
    /// Creates a new instance of the ListIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListIssuesTool {
    fn name(&self) -> &'static str {
        "list_issues"
    }

    fn description(&self) -> &'static str {
        "List issues in a GitHub repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let issues = context
            .github
            .list_issues(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.optional_string("state"),
            )
            .await?;
        Ok(format_list(&issues, "No issues found", |issue| {
            format!("{}: {}", issue.number, issue.title)
        }))
    }
}
