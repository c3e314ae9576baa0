//! Model Context Protocol (MCP) server support
//!
//! The catalogue of GitHub tools, the dispatcher that validates and runs
//! them, and the `rmcp` server handler that exposes both over stdio.

pub mod responses;
pub mod server;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;

#[cfg(test)]
mod tests;

pub use server::McpServer;
pub use tool_registry::{
    McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext, ToolRegistry,
};
