//! Tool for dispatching a workflow run

use crate::error::Result;
use crate::github::WorkflowDispatch;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("workflow_id", ParamKind::String, "Workflow id or file name"),
    ParamSpec::required("ref", ParamKind::String, "Branch or tag to run the workflow on"),
];

/// Tool for triggering `workflow_dispatch` events
#[derive(Default)]
pub struct TriggerWorkflowTool;

impl TriggerWorkflowTool {
    /// Creates a new instance of the TriggerWorkflowTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for TriggerWorkflowTool {
    fn name(&self) -> &'static str {
        "trigger_workflow"
    }

    fn description(&self) -> &'static str {
        "Trigger a workflow_dispatch run of a GitHub Actions workflow"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let workflow_id = arguments.string("workflow_id")?;
        let git_ref = arguments.string("ref")?;
        let body = WorkflowDispatch {
            git_ref: git_ref.to_string(),
        };

        context
            .github
            .dispatch_workflow(
                arguments.string("owner")?,
                arguments.string("repo")?,
                workflow_id,
                &body,
            )
            .await?;
        tracing::info!("Triggered workflow {} on {}", workflow_id, git_ref);
        Ok(format!("Triggered workflow {workflow_id} on {git_ref}"))
    }
}
