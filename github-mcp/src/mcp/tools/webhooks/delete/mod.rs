//! Tool for deleting a webhook

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("hook_id", ParamKind::Number, "Numeric webhook id"),
];

/// Tool for deleting repository webhooks
#[derive(Default)]
pub struct DeleteWebhookTool;

impl DeleteWebhookTool {
    /// Creates a new instance of the DeleteWebhookTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteWebhookTool {
    fn name(&self) -> &'static str {
        "delete_webhook"
    }

    fn description(&self) -> &'static str {
        "Delete a webhook from a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let hook_id = arguments.number("hook_id")?;
        context
            .github
            .delete_hook(arguments.string("owner")?, arguments.string("repo")?, hook_id)
            .await?;
        tracing::info!("Deleted webhook {}", hook_id);
        Ok(format!("Deleted webhook {hook_id}"))
    }
}
