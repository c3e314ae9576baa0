//! Tool for listing branches

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing repository branches
#[derive(Default)]
pub struct ListBranchesTool;

impl ListBranchesTool {
    /// Creates a new instance of the ListBranchesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListBranchesTool {
    fn name(&self) -> &'static str {
        "list_branches"
    }

    fn description(&self) -> &'static str {
        "List branches in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let branches = context
            .github
            .list_branches(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&branches, "No branches found", |branch| {
            branch.name.clone()
        }))
    }
}
