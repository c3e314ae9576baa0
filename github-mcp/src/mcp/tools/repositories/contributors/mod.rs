//! Tool for listing contributors

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing contributors with their contribution counts
#[derive(Default)]
pub struct ListContributorsTool;

impl ListContributorsTool {
    /// Creates a new instance of the ListContributorsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListContributorsTool {
    fn name(&self) -> &'static str {
        "list_contributors"
    }

    fn description(&self) -> &'static str {
        "List contributors to a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let contributors = context
            .github
            .list_contributors(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&contributors, "No contributors found", |contributor| {
            let who = contributor
                .login
                .as_deref()
                .or(contributor.name.as_deref())
                .unwrap_or("anonymous");
            format!("{}: {} contributions", who, contributor.contributions)
        }))
    }
}
