//! Webhook tools for MCP operations

pub mod create;
pub mod delete;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all webhook-related tools with the registry
pub fn register_webhook_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListWebhooksTool::new());
    registry.register(create::CreateWebhookTool::new());
    registry.register(delete::DeleteWebhookTool::new());
}
