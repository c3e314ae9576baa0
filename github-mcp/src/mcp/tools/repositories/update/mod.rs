//! Tool for editing repository settings

use crate::error::Result;
use crate::github::UpdateRepository;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::optional("name", ParamKind::String, "New repository name"),
    ParamSpec::optional("description", ParamKind::String, "New description"),
    ParamSpec::optional("homepage", ParamKind::String, "New homepage URL"),
    ParamSpec::optional("private", ParamKind::Boolean, "Whether the repository is private"),
    ParamSpec::optional("default_branch", ParamKind::String, "New default branch"),
];

/// Tool for updating repository metadata
#[derive(Default)]
pub struct UpdateRepositoryTool;

impl UpdateRepositoryTool {
    /// Creates a new instance of the UpdateRepositoryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateRepositoryTool {
    fn name(&self) -> &'static str {
        "update_repository"
    }

    fn description(&self) -> &'static str {
        "Update a repository's name, description, homepage, visibility or default branch"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let owner = arguments.string("owner")?;
        let repo = arguments.string("repo")?;
        let body = UpdateRepository {
            name: arguments.owned_string("name"),
            description: arguments.owned_string("description"),
            homepage: arguments.owned_string("homepage"),
            private: arguments.optional_bool("private"),
            default_branch: arguments.owned_string("default_branch"),
        };

        let repository = context.github.update_repository(owner, repo, &body).await?;
        tracing::info!("Updated repository {}/{}", owner, repo);
        Ok(format!("Updated repository: {}", repository.html_url))
    }
}
