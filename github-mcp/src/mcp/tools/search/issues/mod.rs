//! Tool for searching issues and pull requests

use super::QUERY;
use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[QUERY];

/// Tool for issue and pull request search
#[derive(Default)]
pub struct SearchIssuesTool;

impl SearchIssuesTool {
    /// Creates a new instance of the SearchIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchIssuesTool {
    fn name(&self) -> &'static str {
        "search_issues"
    }

    fn description(&self) -> &'static str {
        "Search issues and pull requests across GitHub"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let results = context
            .github
            .search_issues(arguments.string("query")?)
            .await?;
        Ok(format_list(&results.items, "No issues found", |item| {
            format!("{}#{}: {}", item.repository_name(), item.number, item.title)
        }))
    }
}
