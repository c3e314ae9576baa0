//! Tool for commenting on an issue

use super::ISSUE_NUMBER;
use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ISSUE_NUMBER,
    ParamSpec::required("body", ParamKind::String, "Comment text in Markdown"),
];

/// Tool for adding a comment to an issue or pull request
#[derive(Default)]
pub struct AddIssueCommentTool;

impl AddIssueCommentTool {
    /// Creates a new instance of the AddIssueCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddIssueCommentTool {
    fn name(&self) -> &'static str {
        "add_issue_comment"
    }

    fn description(&self) -> &'static str {
        "Add a comment to an issue or pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let number = arguments.number("issue_number")?;
        let comment = context
            .github
            .add_issue_comment(
                arguments.string("owner")?,
                arguments.string("repo")?,
                number,
                arguments.string("body")?,
            )
            .await?;
        tracing::info!("Added comment {} to #{}", comment.id, number);
        Ok(format!("Added comment: {}", comment.html_url))
    }
}
