//! Tool for showing the latest published release

use crate::error::Result;
use crate::github::models::Release;
use crate::mcp::shared_utils::{
    format_timestamp, key_value_summary, or_na, with_body, yes_no, NOT_AVAILABLE,
};
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for retrieving the latest release as a key/value summary
#[derive(Default)]
pub struct GetLatestReleaseTool;

impl GetLatestReleaseTool {
    /// Creates a new instance of the GetLatestReleaseTool
    pub fn new() -> Self {
        Self
    }

    fn summarize(release: &Release) -> String {
        let summary = key_value_summary(&[
            ("Release", release.tag_name.clone()),
            ("Name", or_na(release.name.as_deref()).to_string()),
            (
                "Author",
                or_na(release.author.as_ref().map(|u| u.login.as_str())).to_string(),
            ),
            (
                "Published",
                release
                    .published_at
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), format_timestamp),
            ),
            ("Prerelease", yes_no(release.prerelease).to_string()),
            ("URL", release.html_url.clone()),
        ]);
        with_body(summary, release.body.as_deref())
    }
}

#[async_trait]
impl McpTool for GetLatestReleaseTool {
    fn name(&self) -> &'static str {
        "get_latest_release"
    }

    fn description(&self) -> &'static str {
        "Get the latest published release of a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let release = context
            .github
            .get_latest_release(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(Self::summarize(&release))
    }
}
