//! Tool for listing a user's public repositories

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[ParamSpec::required(
    "user",
    ParamKind::String,
    "GitHub username whose repositories to list",
)];

/// Tool for listing the repositories of a given user
#[derive(Default)]
pub struct ListRepositoriesTool;

impl ListRepositoriesTool {
    /// Creates a new instance of the ListRepositoriesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListRepositoriesTool {
    fn name(&self) -> &'static str {
        "list_repositories"
    }

    fn description(&self) -> &'static str {
        "List public repositories for a GitHub user"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let repositories = context
            .github
            .list_user_repositories(arguments.string("user")?)
            .await?;
        Ok(format_list(&repositories, "No repositories found", |repo| {
            repo.name.clone()
        }))
    }
}
