//! Tool for listing labels

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing a repository's labels with their colors
#[derive(Default)]
pub struct ListLabelsTool;

impl ListLabelsTool {
    /// Creates a new instance of the ListLabelsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListLabelsTool {
    fn name(&self) -> &'static str {
        "list_labels"
    }

    fn description(&self) -> &'static str {
        "List labels defined in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let labels = context
            .github
            .list_labels(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&labels, "No labels found", |label| {
            format!("{} (#{})", label.name, label.color)
        }))
    }
}
