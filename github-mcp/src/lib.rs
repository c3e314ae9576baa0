//! # github-mcp
//!
//! GitHub REST operations exposed as Model Context Protocol tools.
//!
//! ## Features
//!
//! - **Tool catalogue**: repositories, issues, pull requests, reviews, releases,
//!   labels, milestones, webhooks, notifications, workflows, search and more
//! - **Declarative tools**: each tool's schema and argument validation come from
//!   one parameter list
//! - **Single error boundary**: every failure becomes an `Error: ...` tool result
//! - **MCP Support**: an `rmcp` server handler ready to serve over stdio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_mcp::{GitHubConfig, McpServer};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GitHubConfig::from_env()?;
//! let server = McpServer::from_config(&config)?;
//!
//! let arguments = json!({"owner": "rust-lang", "repo": "rust"});
//! let result = server
//!     .call("list_branches", arguments.as_object().cloned().unwrap_or_default())
//!     .await;
//! println!("{:?}", result.content);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Environment-driven configuration
pub mod config;

/// Error types
pub mod error;

/// Typed GitHub REST client
pub mod github;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use config::GitHubConfig;
pub use error::{GitHubMcpError, Result};
pub use github::GitHubClient;
pub use mcp::{McpServer, McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext, ToolRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
