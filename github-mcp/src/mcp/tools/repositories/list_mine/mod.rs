//! Tool for listing the authenticated user's repositories

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

/// Tool for listing repositories the token owner can access
#[derive(Default)]
pub struct ListMyRepositoriesTool;

impl ListMyRepositoriesTool {
    /// Creates a new instance of the ListMyRepositoriesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListMyRepositoriesTool {
    fn name(&self) -> &'static str {
        "list_my_repositories"
    }

    fn description(&self) -> &'static str {
        "List repositories of the authenticated user"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        &[]
    }

    async fn execute(&self, _arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let repositories = context.github.list_my_repositories().await?;
        Ok(format_list(&repositories, "No repositories found", |repo| {
            repo.name.clone()
        }))
    }
}
