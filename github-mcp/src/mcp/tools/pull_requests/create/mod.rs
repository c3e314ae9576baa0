//! Tool for opening a pull request

use crate::error::Result;
use crate::github::CreatePullRequest;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("title", ParamKind::String, "Pull request title"),
    ParamSpec::required("head", ParamKind::String, "Branch containing the changes"),
    ParamSpec::required("base", ParamKind::String, "Branch to merge into"),
    ParamSpec::optional("body", ParamKind::String, "Pull request description"),
    ParamSpec::optional("draft", ParamKind::Boolean, "Open as a draft pull request"),
];

/// Tool for creating pull requests
#[derive(Default)]
pub struct CreatePullRequestTool;

impl CreatePullRequestTool {
    /// Creates a new instance of the CreatePullRequestTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreatePullRequestTool {
    fn name(&self) -> &'static str {
        "create_pull_request"
    }

    fn description(&self) -> &'static str {
        "Create a new pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreatePullRequest {
            title: arguments.string("title")?.to_string(),
            head: arguments.string("head")?.to_string(),
            base: arguments.string("base")?.to_string(),
            body: arguments.owned_string("body"),
            draft: arguments.optional_bool("draft"),
        };

        let pull = context
            .github
            .create_pull_request(arguments.string("owner")?, arguments.string("repo")?, &body)
            .await?;
        tracing::info!("Created pull request #{}", pull.number);
        Ok(format!("Created pull request: {}", pull.html_url))
    }
}
