//! Tool implementations for MCP operations
//!
//! One submodule per GitHub resource, each with one submodule per tool.

pub mod collaborators;
pub mod contents;
pub mod issues;
pub mod labels;
pub mod milestones;
pub mod notifications;
pub mod pull_requests;
pub mod releases;
pub mod repositories;
pub mod reviews;
pub mod search;
pub mod users;
pub mod webhooks;
pub mod workflows;

use crate::mcp::tool_registry::{ParamKind, ParamSpec};

/// Repository owner, shared by every repository-scoped tool
pub const OWNER: ParamSpec = ParamSpec::required(
    "owner",
    ParamKind::String,
    "Repository owner (user or organization)",
);

/// Repository name, shared by every repository-scoped tool
pub const REPO: ParamSpec = ParamSpec::required("repo", ParamKind::String, "Repository name");
