//! Tool for merging a pull request

use super::PULL_NUMBER;
use crate::error::Result;
use crate::github::MergePullRequest;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    PULL_NUMBER,
    ParamSpec::optional("commit_title", ParamKind::String, "Title of the merge commit"),
    ParamSpec::optional("commit_message", ParamKind::String, "Body of the merge commit"),
    ParamSpec::optional(
        "merge_method",
        ParamKind::String,
        "Merge method: merge, squash, or rebase",
    ),
];

/// Tool for merging pull requests
///
/// GitHub answers `200` with `merged: false` when a merge is refused without
/// an HTTP error; the outcome line reports that as `Failed`.
#[derive(Default)]
pub struct MergePullRequestTool;

impl MergePullRequestTool {
    /// Creates a new instance of the MergePullRequestTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for MergePullRequestTool {
    fn name(&self) -> &'static str {
        "merge_pull_request"
    }

    fn description(&self) -> &'static str {
        "Merge a pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let number = arguments.number("pull_number")?;
        let body = MergePullRequest {
            commit_title: arguments.owned_string("commit_title"),
            commit_message: arguments.owned_string("commit_message"),
            merge_method: arguments.owned_string("merge_method"),
        };

        let result = context
            .github
            .merge_pull_request(
                arguments.string("owner")?,
                arguments.string("repo")?,
                number,
                &body,
            )
            .await?;

        let outcome = if result.merged {
            tracing::info!("Merged pull request #{}", number);
            "Succeeded"
        } else {
            tracing::warn!("Merge of pull request #{} was refused", number);
            "Failed"
        };
        Ok(format!(
            "{}\nMerge of pull request #{}: {}",
            result.message, number, outcome
        ))
    }
}
