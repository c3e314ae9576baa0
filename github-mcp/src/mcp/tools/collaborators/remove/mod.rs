//! Tool for removing a collaborator

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("username", ParamKind::String, "GitHub username to remove"),
];

/// Tool for removing collaborators from a repository
#[derive(Default)]
pub struct RemoveCollaboratorTool;

impl RemoveCollaboratorTool {
    /// Creates a new instance of the RemoveCollaboratorTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for RemoveCollaboratorTool {
    fn name(&self) -> &'static str {
        "remove_collaborator"
    }

    fn description(&self) -> &'static str {
        "Remove a collaborator from a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let owner = arguments.string("owner")?;
        let repo = arguments.string("repo")?;
        let username = arguments.string("username")?;

        context.github.remove_collaborator(owner, repo, username).await?;
        tracing::info!("Removed {} from {}/{}", username, owner, repo);
        Ok(format!("Removed {username} from {owner}/{repo}"))
    }
}
