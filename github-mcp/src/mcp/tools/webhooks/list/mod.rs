//! Tool for listing webhooks

use crate::error::Result;
use crate::mcp::shared_utils::{format_list, or_na};
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing repository webhooks
#[derive(Default)]
pub struct ListWebhooksTool;

impl ListWebhooksTool {
    /// Creates a new instance of the ListWebhooksTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListWebhooksTool {
    fn name(&self) -> &'static str {
        "list_webhooks"
    }

    fn description(&self) -> &'static str {
        "List webhooks configured on a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let hooks = context
            .github
            .list_hooks(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&hooks, "No webhooks found", |hook| {
            format!(
                "{}: {} [{}] ({})",
                hook.id,
                or_na(hook.config.url.as_deref()),
                hook.events.join(", "),
                if hook.active { "active" } else { "inactive" }
            )
        }))
    }
}
