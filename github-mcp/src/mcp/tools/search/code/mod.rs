//! Tool for searching code

use super::QUERY;
use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[QUERY];

/// Tool for code search
#[derive(Default)]
pub struct SearchCodeTool;

impl SearchCodeTool {
    /// Creates a new instance of the SearchCodeTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchCodeTool {
    fn name(&self) -> &'static str {
        "search_code"
    }

    fn description(&self) -> &'static str {
        "Search code across GitHub repositories"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let results = context
            .github
            .search_code(arguments.string("query")?)
            .await?;
        Ok(format_list(&results.items, "No code found", |item| {
            format!("{}: {}", item.repository.full_name, item.path)
        }))
    }
}
