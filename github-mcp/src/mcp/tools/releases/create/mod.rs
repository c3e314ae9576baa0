//! Tool for publishing a release

use crate::error::Result;
use crate::github::CreateRelease;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("tag_name", ParamKind::String, "Tag for the release"),
    ParamSpec::optional("name", ParamKind::String, "Release title"),
    ParamSpec::optional("body", ParamKind::String, "Release notes in Markdown"),
    ParamSpec::optional(
        "target_commitish",
        ParamKind::String,
        "Branch or commit the tag is created from when it does not exist",
    ),
    ParamSpec::optional("draft", ParamKind::Boolean, "Create an unpublished draft"),
    ParamSpec::optional("prerelease", ParamKind::Boolean, "Mark as a prerelease"),
];

/// Tool for creating releases
#[derive(Default)]
pub struct CreateReleaseTool;

impl CreateReleaseTool {
    /// Creates a new instance of the CreateReleaseTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateReleaseTool {
    fn name(&self) -> &'static str {
        "create_release"
    }

    fn description(&self) -> &'static str {
        "Create a release in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreateRelease {
            tag_name: arguments.string("tag_name")?.to_string(),
            name: arguments.owned_string("name"),
            body: arguments.owned_string("body"),
            target_commitish: arguments.owned_string("target_commitish"),
            draft: arguments.optional_bool("draft"),
            prerelease: arguments.optional_bool("prerelease"),
        };

        let release = context
            .github
            .create_release(arguments.string("owner")?, arguments.string("repo")?, &body)
            .await?;
        tracing::info!("Created release {} ({})", release.tag_name, release.id);
        Ok(format!("Created release: {}", release.html_url))
    }
}
