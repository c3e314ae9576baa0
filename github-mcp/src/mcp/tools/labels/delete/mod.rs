//! Tool for deleting a label

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("name", ParamKind::String, "Label name"),
];

/// Tool for deleting repository labels
#[derive(Default)]
pub struct DeleteLabelTool;

impl DeleteLabelTool {
    /// Creates a new instance of the DeleteLabelTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteLabelTool {
    fn name(&self) -> &'static str {
        "delete_label"
    }

    fn description(&self) -> &'static str {
        "Delete a label from a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let name = arguments.string("name")?;
        context
            .github
            .delete_label(arguments.string("owner")?, arguments.string("repo")?, name)
            .await?;
        tracing::info!("Deleted label {}", name);
        Ok(format!("Deleted label {name}"))
    }
}
