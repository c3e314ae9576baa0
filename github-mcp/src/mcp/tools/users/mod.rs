//! User and rate limit tools for MCP operations

pub mod get_authenticated;
pub mod rate_limit;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all user-related tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) {
    registry.register(get_authenticated::GetAuthenticatedUserTool::new());
    registry.register(rate_limit::GetRateLimitTool::new());
}
