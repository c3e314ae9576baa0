//! Tool for inviting a collaborator

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("username", ParamKind::String, "GitHub username to add"),
    ParamSpec::optional(
        "permission",
        ParamKind::String,
        "Permission to grant: pull, triage, push, maintain, or admin",
    ),
];

/// Tool for adding collaborators to a repository
#[derive(Default)]
pub struct AddCollaboratorTool;

impl AddCollaboratorTool {
    /// Creates a new instance of the AddCollaboratorTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddCollaboratorTool {
    fn name(&self) -> &'static str {
        "add_collaborator"
    }

    fn description(&self) -> &'static str {
        "Invite a user to collaborate on a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let owner = arguments.string("owner")?;
        let repo = arguments.string("repo")?;
        let username = arguments.string("username")?;

        let invitation = context
            .github
            .add_collaborator(owner, repo, username, arguments.optional_string("permission"))
            .await?;

        Ok(match invitation {
            Some(invitation) => {
                tracing::info!("Created invitation {} for {}", invitation.id, username);
                format!("Invited {username} to {owner}/{repo}")
            }
            None => format!("{username} is already a collaborator on {owner}/{repo}"),
        })
    }
}
