//! Tool for listing workflow runs

use crate::error::Result;
use crate::mcp::shared_utils::{format_list, or_na};
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::optional(
        "workflow_id",
        ParamKind::String,
        "Workflow id or file name; all workflows when omitted",
    ),
    ParamSpec::optional("branch", ParamKind::String, "Only runs for this branch"),
];

/// Tool for listing recent workflow runs
#[derive(Default)]
pub struct ListWorkflowRunsTool;

impl ListWorkflowRunsTool {
    /// Creates a new instance of the ListWorkflowRunsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListWorkflowRunsTool {
    fn name(&self) -> &'static str {
        "list_workflow_runs"
    }

    fn description(&self) -> &'static str {
        "List GitHub Actions workflow runs for a repository or a single workflow"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let list = context
            .github
            .list_workflow_runs(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.optional_string("workflow_id"),
                arguments.optional_string("branch"),
            )
            .await?;
        Ok(format_list(&list.workflow_runs, "No workflow runs found", |run| {
            format!(
                "{}: {} #{} {}/{}",
                run.id,
                or_na(run.name.as_deref()),
                run.run_number,
                or_na(run.status.as_deref()),
                or_na(run.conclusion.as_deref())
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_numeric_workflow_id_is_accepted_as_text() {
        let transport = MockTransport::new();
        transport.respond_with(json!({
            "total_count": 1,
            "workflow_runs": [
                {"id": 5, "name": "CI", "run_number": 42, "status": "in_progress"}
            ]
        }));
        let context = ToolContext::new(transport.client());

        let arguments = ToolArguments::validate(
            PARAMETERS,
            json!({"owner": "o", "repo": "r", "workflow_id": 1234})
                .as_object()
                .unwrap(),
        )
        .unwrap();
        let text = ListWorkflowRunsTool::new()
            .execute(arguments, &context)
            .await
            .unwrap();

        assert_eq!(text, "5: CI #42 in_progress/N/A");
        assert_eq!(
            transport.single_request().path(),
            "/repos/o/r/actions/workflows/1234/runs"
        );
    }
}
