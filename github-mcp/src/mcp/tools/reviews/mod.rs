//! Pull request review tools for MCP operations

pub mod create;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all review-related tools with the registry
pub fn register_review_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListReviewsTool::new());
    registry.register(create::CreateReviewTool::new());
}
