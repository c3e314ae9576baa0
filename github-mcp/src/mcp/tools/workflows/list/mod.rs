//! Tool for listing workflows

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing the workflows defined in a repository
#[derive(Default)]
pub struct ListWorkflowsTool;

impl ListWorkflowsTool {
    /// Creates a new instance of the ListWorkflowsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListWorkflowsTool {
    fn name(&self) -> &'static str {
        "list_workflows"
    }

    fn description(&self) -> &'static str {
        "List GitHub Actions workflows in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let list = context
            .github
            .list_workflows(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&list.workflows, "No workflows found", |workflow| {
            format!("{}: {} ({})", workflow.id, workflow.name, workflow.state)
        }))
    }
}
