//! Repository tools for MCP operations
//!
//! Listing, inspecting and managing repositories, plus the per-repository
//! listings (branches, commits, languages, contributors).

pub mod branches;
pub mod commits;
pub mod contributors;
pub mod create;
pub mod delete;
pub mod fork;
pub mod get;
pub mod languages;
pub mod list;
pub mod list_mine;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all repository-related tools with the registry
pub fn register_repository_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListRepositoriesTool::new());
    registry.register(list_mine::ListMyRepositoriesTool::new());
    registry.register(get::GetRepositoryTool::new());
    registry.register(create::CreateRepositoryTool::new());
    registry.register(update::UpdateRepositoryTool::new());
    registry.register(delete::DeleteRepositoryTool::new());
    registry.register(fork::ForkRepositoryTool::new());
    registry.register(branches::ListBranchesTool::new());
    registry.register(commits::ListCommitsTool::new());
    registry.register(languages::ListLanguagesTool::new());
    registry.register(contributors::ListContributorsTool::new());
}
