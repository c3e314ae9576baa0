//! Tool for editing an issue

use super::ISSUE_NUMBER;
use crate::error::Result;
use crate::github::UpdateIssue;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ISSUE_NUMBER,
    ParamSpec::optional("title", ParamKind::String, "New title"),
    ParamSpec::optional("body", ParamKind::String, "New body"),
    ParamSpec::optional("state", ParamKind::String, "New state: open or closed"),
];

/// Tool for updating an issue's title, body or state
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "update_issue"
    }

    fn description(&self) -> &'static str {
        "Update the title, body or state of an existing issue"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let number = arguments.number("issue_number")?;
        let body = UpdateIssue {
            title: arguments.owned_string("title"),
            body: arguments.owned_string("body"),
            state: arguments.owned_string("state"),
        };

        let issue = context
            .github
            .update_issue(
                arguments.string("owner")?,
                arguments.string("repo")?,
                number,
                &body,
            )
            .await?;
        tracing::info!("Updated issue #{}", number);
        Ok(format!("Updated issue #{}: {}", issue.number, issue.html_url))
    }
}
