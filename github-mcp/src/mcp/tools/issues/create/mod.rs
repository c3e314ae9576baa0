//! Tool for opening an issue

use crate::error::Result;
use crate::github::CreateIssue;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("title", ParamKind::String, "Issue title"),
    ParamSpec::optional("body", ParamKind::String, "Issue body in Markdown"),
];

/// Tool for creating new issues
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "create_issue"
    }

    fn description(&self) -> &'static str {
        "Create a new issue in a GitHub repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let owner = arguments.string("owner")?;
        let repo = arguments.string("repo")?;
        let body = CreateIssue {
            title: arguments.string("title")?.to_string(),
            body: arguments.owned_string("body"),
        };

        tracing::debug!("Creating issue: {}", body.title);
        let issue = context.github.create_issue(owner, repo, &body).await?;
        tracing::info!("Created issue #{} in {}/{}", issue.number, owner, repo);
        Ok(format!("Created issue: {}", issue.html_url))
    }
}
