//! Search tools for MCP operations

pub mod code;
pub mod issues;
pub mod repositories;

use crate::mcp::tool_registry::{ParamKind, ParamSpec, ToolRegistry};

/// Search query using GitHub's search syntax
pub const QUERY: ParamSpec = ParamSpec::required(
    "query",
    ParamKind::String,
    "Search query using GitHub search syntax",
);

/// Register all search tools with the registry
pub fn register_search_tools(registry: &mut ToolRegistry) {
    registry.register(repositories::SearchRepositoriesTool::new());
    registry.register(issues::SearchIssuesTool::new());
    registry.register(code::SearchCodeTool::new());
}
