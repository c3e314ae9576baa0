//! Collaborator tools for MCP operations

pub mod add;
pub mod list;
pub mod remove;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all collaborator-related tools with the registry
pub fn register_collaborator_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListCollaboratorsTool::new());
    registry.register(add::AddCollaboratorTool::new());
    registry.register(remove::RemoveCollaboratorTool::new());
}
