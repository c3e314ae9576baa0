//! Tool for listing collaborators

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing collaborators and their permission level
#[derive(Default)]
pub struct ListCollaboratorsTool;

impl ListCollaboratorsTool {
    /// Creates a new instance of the ListCollaboratorsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListCollaboratorsTool {
    fn name(&self) -> &'static str {
        "list_collaborators"
    }

    fn description(&self) -> &'static str {
        "List collaborators on a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let collaborators = context
            .github
            .list_collaborators(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&collaborators, "No collaborators found", |collaborator| {
            let permission = collaborator
                .role_name
                .as_deref()
                .or_else(|| collaborator.permissions.as_ref().map(|p| p.highest()))
                .unwrap_or("unknown");
            format!("{} ({})", collaborator.login, permission)
        }))
    }
}
