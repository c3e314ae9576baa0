//! Tool for deleting a repository

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for deleting repositories
#[derive(Default)]
pub struct DeleteRepositoryTool;

impl DeleteRepositoryTool {
    /// Creates a new instance of the DeleteRepositoryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteRepositoryTool {
    fn name(&self) -> &'static str {
        "delete_repository"
    }

    fn description(&self) -> &'static str {
        "Delete a repository (requires admin rights and the delete_repo scope)"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let owner = arguments.string("owner")?;
        let repo = arguments.string("repo")?;

        context.github.delete_repository(owner, repo).await?;
        tracing::info!("Deleted repository {}/{}", owner, repo);
        Ok(format!("Deleted repository {owner}/{repo}"))
    }
}
