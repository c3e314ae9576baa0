//! GitHub Actions workflow tools for MCP operations

pub mod list;
pub mod list_runs;
pub mod trigger;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all workflow-related tools with the registry
pub fn register_workflow_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListWorkflowsTool::new());
    registry.register(list_runs::ListWorkflowRunsTool::new());
    registry.register(trigger::TriggerWorkflowTool::new());
}
