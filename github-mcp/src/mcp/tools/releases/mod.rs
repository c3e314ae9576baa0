//! Release tools for MCP operations

pub mod create;
pub mod delete;
pub mod get_latest;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all release-related tools with the registry
pub fn register_release_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListReleasesTool::new());
    registry.register(get_latest::GetLatestReleaseTool::new());
    registry.register(create::CreateReleaseTool::new());
    registry.register(delete::DeleteReleaseTool::new());
}
