//! Tool for searching repositories

use super::QUERY;
use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[QUERY];

/// Tool for repository search
#[derive(Default)]
pub struct SearchRepositoriesTool;

impl SearchRepositoriesTool {
    /// Creates a new instance of the SearchRepositoriesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchRepositoriesTool {
    fn name(&self) -> &'static str {
        "search_repositories"
    }

    fn description(&self) -> &'static str {
        "Search GitHub repositories"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let results = context
            .github
            .search_repositories(arguments.string("query")?)
            .await?;
        Ok(format_list(&results.items, "No repositories found", |repo| {
            format!(
                "{}: {}",
                repo.full_name,
                repo.description.as_deref().unwrap_or("No description")
            )
        }))
    }
}
