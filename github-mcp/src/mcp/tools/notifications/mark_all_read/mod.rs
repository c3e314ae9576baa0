//! Tool for marking every notification as read

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

/// Tool for clearing the notification inbox
#[derive(Default)]
pub struct MarkNotificationsReadTool;

impl MarkNotificationsReadTool {
    /// Creates a new instance of the MarkNotificationsReadTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for MarkNotificationsReadTool {
    fn name(&self) -> &'static str {
        "mark_notifications_read"
    }

    fn description(&self) -> &'static str {
        "Mark all notifications as read"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        &[]
    }

    async fn execute(&self, _arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        context.github.mark_notifications_read().await?;
        tracing::info!("Marked all notifications as read");
        Ok("Marked all notifications as read".to_string())
    }
}
