//! Tool for editing a pull request

use super::PULL_NUMBER;
use crate::error::Result;
use crate::github::UpdatePullRequest;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    PULL_NUMBER,
    ParamSpec::optional("title", ParamKind::String, "New title"),
    ParamSpec::optional("body", ParamKind::String, "New description"),
    ParamSpec::optional("state", ParamKind::String, "New state: open or closed"),
    ParamSpec::optional("base", ParamKind::String, "New base branch"),
];

/// Tool for updating a pull request
#[derive(Default)]
pub struct UpdatePullRequestTool;

impl UpdatePullRequestTool {
    /// Creates a new instance of the UpdatePullRequestTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdatePullRequestTool {
    fn name(&self) -> &'static str {
        "update_pull_request"
    }

    fn description(&self) -> &'static str {
        "Update the title, description, state or base branch of a pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let number = arguments.number("pull_number")?;
        let body = UpdatePullRequest {
            title: arguments.owned_string("title"),
            body: arguments.owned_string("body"),
            state: arguments.owned_string("state"),
            base: arguments.owned_string("base"),
        };

        let pull = context
            .github
            .update_pull_request(
                arguments.string("owner")?,
                arguments.string("repo")?,
                number,
                &body,
            )
            .await?;
        tracing::info!("Updated pull request #{}", number);
        Ok(format!("Updated pull request #{}: {}", pull.number, pull.html_url))
    }
}
