//! Tool for listing milestones

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::optional("state", ParamKind::String, "Filter by state: open, closed, or all"),
];

/// Tool for listing milestones
#[derive(Default)]
pub struct ListMilestonesTool;

impl ListMilestonesTool {
    /// Creates a new instance of the ListMilestonesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListMilestonesTool {
    fn name(&self) -> &'static str {
        "list_milestones"
    }

    fn description(&self) -> &'static str {
        "List milestones in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let milestones = context
            .github
            .list_milestones(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.optional_string("state"),
            )
            .await?;
        Ok(format_list(&milestones, "No milestones found", |milestone| {
            format!("{}: {} ({})", milestone.number, milestone.title, milestone.state)
        }))
    }
}
