//! Pull request tools for MCP operations

pub mod create;
pub mod files;
pub mod get;
pub mod list;
pub mod merge;
pub mod update;

use crate::mcp::tool_registry::{ParamKind, ParamSpec, ToolRegistry};

/// Pull request number, shared by the single-pull-request tools
pub const PULL_NUMBER: ParamSpec =
    ParamSpec::required("pull_number", ParamKind::Number, "Pull request number");

/// Register all pull-request-related tools with the registry
pub fn register_pull_request_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListPullRequestsTool::new());
    registry.register(get::GetPullRequestTool::new());
    registry.register(create::CreatePullRequestTool::new());
    registry.register(update::UpdatePullRequestTool::new());
    registry.register(merge::MergePullRequestTool::new());
    registry.register(files::ListPullRequestFilesTool::new());
}
