//! Tool for listing notification threads

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    ParamSpec::optional("all", ParamKind::Boolean, "Include notifications already marked read"),
    ParamSpec::optional(
        "participating",
        ParamKind::Boolean,
        "Only notifications the user is directly participating in",
    ),
];

/// Tool for listing the authenticated user's notifications
#[derive(Default)]
pub struct ListNotificationsTool;

impl ListNotificationsTool {
    /// Creates a new instance of the ListNotificationsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListNotificationsTool {
    fn name(&self) -> &'static str {
        "list_notifications"
    }

    fn description(&self) -> &'static str {
        "List notifications for the authenticated user"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let notifications = context
            .github
            .list_notifications(
                arguments.optional_bool("all"),
                arguments.optional_bool("participating"),
            )
            .await?;
        Ok(format_list(&notifications, "No notifications found", |thread| {
            format!(
                "{}: [{}] {} ({})",
                thread.id, thread.repository.full_name, thread.subject.title, thread.reason
            )
        }))
    }
}
