//! Notification tools for MCP operations

pub mod list;
pub mod mark_all_read;
pub mod mark_thread_read;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all notification-related tools with the registry
pub fn register_notification_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListNotificationsTool::new());
    registry.register(mark_all_read::MarkNotificationsReadTool::new());
    registry.register(mark_thread_read::MarkThreadReadTool::new());
}
