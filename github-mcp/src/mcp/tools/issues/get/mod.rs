//! Tool for showing a single issue

use super::ISSUE_NUMBER;
use crate::error::Result;
use crate::github::models::Issue;
use crate::mcp::shared_utils::{
    format_timestamp, key_value_summary, or_na, with_body, NOT_AVAILABLE,
};
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO, ISSUE_NUMBER];

/// Tool for retrieving one issue as a key/value summary
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }

    fn summarize(issue: &Issue) -> String {
        let labels = if issue.labels.is_empty() {
            "none".to_string()
        } else {
            issue
                .labels
                .iter()
                .map(|label| label.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let assignees = if issue.assignees.is_empty() {
            "none".to_string()
        } else {
            issue
                .assignees
                .iter()
                .map(|user| user.login.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let summary = key_value_summary(&[
            ("Issue", format!("#{} {}", issue.number, issue.title)),
            ("State", issue.state.clone()),
            (
                "Author",
                or_na(issue.user.as_ref().map(|u| u.login.as_str())).to_string(),
            ),
            ("Labels", labels),
            ("Assignees", assignees),
            ("Comments", issue.comments.to_string()),
            (
                "Created",
                issue
                    .created_at
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("URL", issue.html_url.clone()),
        ]);
        with_body(summary, issue.body.as_deref())
    }
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "get_issue"
    }

    fn description(&self) -> &'static str {
        "Get the details of a single issue"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let issue = context
            .github
            .get_issue(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.number("issue_number")?,
            )
            .await?;
        Ok(Self::summarize(&issue))
    }
}
