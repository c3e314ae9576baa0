//! Tool for creating a milestone

use crate::error::Result;
use crate::github::CreateMilestone;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("title", ParamKind::String, "Milestone title"),
    ParamSpec::optional("description", ParamKind::String, "Milestone description"),
    ParamSpec::optional(
        "due_on",
        ParamKind::String,
        "Due date as an ISO 8601 timestamp, e.g. 2024-12-31T00:00:00Z",
    ),
];

/// Tool for creating milestones
#[derive(Default)]
pub struct CreateMilestoneTool;

impl CreateMilestoneTool {
    /// Creates a new instance of the CreateMilestoneTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateMilestoneTool {
    fn name(&self) -> &'static str {
        "create_milestone"
    }

    fn description(&self) -> &'static str {
        "Create a milestone in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreateMilestone {
            title: arguments.string("title")?.to_string(),
            description: arguments.owned_string("description"),
            due_on: arguments.owned_string("due_on"),
        };

        let milestone = context
            .github
            .create_milestone(arguments.string("owner")?, arguments.string("repo")?, &body)
            .await?;
        tracing::info!("Created milestone {}", milestone.number);
        Ok(format!("Created milestone: {}", milestone.html_url))
    }
}
