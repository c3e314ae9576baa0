//! Milestone tools for MCP operations

pub mod create;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all milestone-related tools with the registry
pub fn register_milestone_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListMilestonesTool::new());
    registry.register(create::CreateMilestoneTool::new());
}
