//! MCP server exposing the GitHub tool catalogue

use crate::config::GitHubConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::tool_registry::{ToolContext, ToolRegistry};

const INSTRUCTIONS: &str = "Tools for working with GitHub through its REST API: repositories, \
issues, pull requests, reviews, releases, labels, milestones, webhooks, notifications, \
Actions workflows, search and rate limits. Repository-scoped tools take `owner` and `repo`. \
Authentication uses the GITHUB_TOKEN the server was started with.";

/// MCP server for GitHub operations
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server over the given GitHub client
    pub fn new(github: GitHubClient) -> Self {
        let tool_registry = ToolRegistry::with_all_tools();
        tracing::debug!("Registered {} tools", tool_registry.len());

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(github)),
        }
    }

    /// Create a new MCP server talking to GitHub over HTTP
    pub fn from_config(config: &GitHubConfig) -> Result<Self> {
        if config.token.is_none() {
            tracing::warn!("No GitHub token configured; only anonymous endpoints will work");
        }
        Ok(Self::new(GitHubClient::from_config(config)?))
    }

    /// The registered tools
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Run one tool by name, exactly as `tools/call` would
    pub async fn call(&self, name: &str, arguments: Map<String, Value>) -> CallToolResult {
        self.tool_registry
            .dispatch(name, arguments, &self.tool_context)
            .await
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self
            .call(&request.name, request.arguments.unwrap_or_default())
            .await)
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: "github-mcp".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
