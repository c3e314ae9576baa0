//! Tool for deleting a release

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("release_id", ParamKind::Number, "Numeric release id"),
];

/// Tool for deleting releases
#[derive(Default)]
pub struct DeleteReleaseTool;

impl DeleteReleaseTool {
    /// Creates a new instance of the DeleteReleaseTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteReleaseTool {
    fn name(&self) -> &'static str {
        "delete_release"
    }

    fn description(&self) -> &'static str {
        "Delete a release (the git tag is kept)"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let release_id = arguments.number("release_id")?;
        context
            .github
            .delete_release(arguments.string("owner")?, arguments.string("repo")?, release_id)
            .await?;
        tracing::info!("Deleted release {}", release_id);
        Ok(format!("Deleted release {release_id}"))
    }
}
