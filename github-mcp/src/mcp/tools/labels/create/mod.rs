//! Tool for creating a label

use crate::error::Result;
use crate::github::CreateLabel;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("name", ParamKind::String, "Label name"),
    ParamSpec::required("color", ParamKind::String, "Hex color, e.g. d73a4a"),
    ParamSpec::optional("description", ParamKind::String, "Label description"),
];

/// Tool for creating repository labels
#[derive(Default)]
pub struct CreateLabelTool;

impl CreateLabelTool {
    /// Creates a new instance of the CreateLabelTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateLabelTool {
    fn name(&self) -> &'static str {
        "create_label"
    }

    fn description(&self) -> &'static str {
        "Create a label in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreateLabel {
            name: arguments.string("name")?.to_string(),
            // GitHub wants the hex digits without the leading '#'.
            color: arguments.string("color")?.trim_start_matches('#').to_string(),
            description: arguments.owned_string("description"),
        };

        let label = context
            .github
            .create_label(arguments.string("owner")?, arguments.string("repo")?, &body)
            .await?;
        tracing::info!("Created label {}", label.name);
        Ok(format!("Created label: {}", label.name))
    }
}
