//! Tool for listing releases

use crate::error::Result;
use crate::github::models::Release;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing releases as `<tag>: <name>` lines
#[derive(Default)]
pub struct ListReleasesTool;

impl ListReleasesTool {
    /// Creates a new instance of the ListReleasesTool
    pub fn new() -> Self {
        Self
    }

    fn render(release: &Release) -> String {
        let name = release
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&release.tag_name);
        let mut line = format!("{}: {}", release.tag_name, name);
        if release.draft {
            line.push_str(" [draft]");
        }
        if release.prerelease {
            line.push_str(" [prerelease]");
        }
        line
    }
}

#[async_trait]
impl McpTool for ListReleasesTool {
    fn name(&self) -> &'static str {
        "list_releases"
    }

    fn description(&self) -> &'static str {
        "List releases in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let releases = context
            .github
            .list_releases(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(format_list(&releases, "No releases found", Self::render))
    }
}
