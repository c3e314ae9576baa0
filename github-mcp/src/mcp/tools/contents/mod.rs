//! File contents tools for MCP operations

pub mod create_or_update;
pub mod get;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all contents-related tools with the registry
pub fn register_contents_tools(registry: &mut ToolRegistry) {
    registry.register(get::GetFileContentsTool::new());
    registry.register(create_or_update::CreateOrUpdateFileTool::new());
}
