//! Issue management tools for MCP operations
//!
//! This module provides all issue-related tools using the tool registry pattern.
//! Each tool is in its own submodule.

pub mod add_comment;
pub mod create;
pub mod get;
pub mod list;
pub mod list_comments;
pub mod update;

use crate::mcp::tool_registry::{ParamKind, ParamSpec, ToolRegistry};

/// Issue number, shared by the single-issue tools
pub const ISSUE_NUMBER: ParamSpec =
    ParamSpec::required("issue_number", ParamKind::Number, "Issue number");

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListIssuesTool::new());
    registry.register(get::GetIssueTool::new());
    registry.register(create::CreateIssueTool::new());
    registry.register(update::UpdateIssueTool::new());
    registry.register(list_comments::ListIssueCommentsTool::new());
    registry.register(add_comment::AddIssueCommentTool::new());
}
