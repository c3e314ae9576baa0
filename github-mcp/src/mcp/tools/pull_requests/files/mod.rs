//! Tool for listing files changed by a pull request

use super::PULL_NUMBER;
use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO, PULL_NUMBER];

/// Tool for listing changed files with their diff stats
#[derive(Default)]
pub struct ListPullRequestFilesTool;

impl ListPullRequestFilesTool {
    /// Creates a new instance of the ListPullRequestFilesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListPullRequestFilesTool {
    fn name(&self) -> &'static str {
        "list_pull_request_files"
    }

    fn description(&self) -> &'static str {
        "List the files changed in a pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let files = context
            .github
            .list_pull_request_files(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.number("pull_number")?,
            )
            .await?;
        Ok(format_list(&files, "No files found", |file| {
            format!(
                "{} ({}, +{}/-{})",
                file.filename, file.status, file.additions, file.deletions
            )
        }))
    }
}
