//! Label tools for MCP operations

pub mod create;
pub mod delete;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all label-related tools with the registry
pub fn register_label_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListLabelsTool::new());
    registry.register(create::CreateLabelTool::new());
    registry.register(delete::DeleteLabelTool::new());
}
