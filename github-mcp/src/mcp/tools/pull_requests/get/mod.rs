//! Tool for showing a single pull request

use super::PULL_NUMBER;
use crate::error::Result;
use crate::github::models::{PullRequest, PullRequestRef};
use crate::mcp::shared_utils::{key_value_summary, or_na, with_body, yes_no, NOT_AVAILABLE};
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO, PULL_NUMBER];

/// Tool for retrieving one pull request as a key/value summary
#[derive(Default)]
pub struct GetPullRequestTool;

impl GetPullRequestTool {
    /// Creates a new instance of the GetPullRequestTool
    pub fn new() -> Self {
        Self
    }

    fn branch(side: Option<&PullRequestRef>) -> String {
        side.map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.ref_name.clone())
    }

    fn summarize(pull: &PullRequest) -> String {
        let state = if pull.merged == Some(true) {
            "merged"
        } else {
            pull.state.as_str()
        };
        let mergeable = pull.mergeable.map_or(NOT_AVAILABLE, yes_no);

        let summary = key_value_summary(&[
            ("Pull request", format!("#{} {}", pull.number, pull.title)),
            ("State", state.to_string()),
            (
                "Author",
                or_na(pull.user.as_ref().map(|u| u.login.as_str())).to_string(),
            ),
            (
                "Branches",
                format!(
                    "{} -> {}",
                    Self::branch(pull.head.as_ref()),
                    Self::branch(pull.base.as_ref())
                ),
            ),
            ("Draft", yes_no(pull.draft.unwrap_or(false)).to_string()),
            ("Mergeable", mergeable.to_string()),
            ("URL", pull.html_url.clone()),
        ]);
        with_body(summary, pull.body.as_deref())
    }
}

#[async_trait]
impl McpTool for GetPullRequestTool {
    fn name(&self) -> &'static str {
        "get_pull_request"
    }

    fn description(&self) -> &'static str {
        "Get the details of a single pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let pull = context
            .github
            .get_pull_request(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.number("pull_number")?,
            )
            .await?;
        Ok(Self::summarize(&pull))
    }
}
