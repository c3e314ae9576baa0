//! Tool for forking a repository

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::optional(
        "organization",
        ParamKind::String,
        "Organization to fork into (defaults to the authenticated user)",
    ),
];

/// Tool for forking repositories
#[derive(Default)]
pub struct ForkRepositoryTool;

impl ForkRepositoryTool {
    /// Creates a new instance of the ForkRepositoryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ForkRepositoryTool {
    fn name(&self) -> &'static str {
        "fork_repository"
    }

    fn description(&self) -> &'static str {
        "Fork a repository to the authenticated user or an organization"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let fork = context
            .github
            .fork_repository(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.optional_string("organization"),
            )
            .await?;
        tracing::info!("Forked repository into {}", fork.full_name);
        Ok(format!("Forked repository: {}", fork.html_url))
    }
}
