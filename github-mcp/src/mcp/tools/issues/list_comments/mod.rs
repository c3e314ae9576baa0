//! Tool for listing the comments on an issue

use super::ISSUE_NUMBER;
use crate::error::Result;
use crate::mcp::shared_utils::{first_line, format_list};
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO, ISSUE_NUMBER];

/// Tool for listing issue comments as `<login>: <first line>` lines
#[derive(Default)]
pub struct ListIssueCommentsTool;

impl ListIssueCommentsTool {
    /// Creates a new instance of the ListIssueCommentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListIssueCommentsTool {
    fn name(&self) -> &'static str {
        "list_issue_comments"
    }

    fn description(&self) -> &'static str {
        "List comments on an issue or pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let comments = context
            .github
            .list_issue_comments(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.number("issue_number")?,
            )
            .await?;
        Ok(format_list(&comments, "No comments found", |comment| {
            format!(
                "{}: {}",
                comment.user.as_ref().map_or("ghost", |u| u.login.as_str()),
                first_line(comment.body.as_deref().unwrap_or(""))
            )
        }))
    }
}
