//! Tool for listing commits

use crate::error::Result;
use crate::mcp::shared_utils::{first_line, format_list, short_sha};
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::optional("sha", ParamKind::String, "Branch name or commit SHA to start from"),
    ParamSpec::optional("path", ParamKind::String, "Only commits touching this path"),
];

/// Tool for listing recent commits as `<sha>: <subject>` lines
#[derive(Default)]
pub struct ListCommitsTool;

impl ListCommitsTool {
    /// Creates a new instance of the ListCommitsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListCommitsTool {
    fn name(&self) -> &'static str {
        "list_commits"
    }

    fn description(&self) -> &'static str {
        "List commits in a repository, optionally from a branch or limited to a path"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let commits = context
            .github
            .list_commits(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.optional_string("sha"),
                arguments.optional_string("path"),
            )
            .await?;
        Ok(format_list(&commits, "No commits found", |commit| {
            format!(
                "{}: {}",
                short_sha(&commit.sha),
                first_line(&commit.commit.message)
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_commits_uses_subject_line() {
        let transport = MockTransport::new();
        transport.respond_with(json!([
            {"sha": "abcdef0123456789", "commit": {"message": "Fix parser\n\nLonger body"}}
        ]));
        let context = ToolContext::new(transport.client());

        let arguments = ToolArguments::validate(
            PARAMETERS,
            json!({"owner": "o", "repo": "r", "path": "src"}).as_object().unwrap(),
        )
        .unwrap();
        let text = ListCommitsTool::new().execute(arguments, &context).await.unwrap();

        assert_eq!(text, "abcdef0: Fix parser");
        assert_eq!(
            transport.single_request().query,
            vec![("path".to_string(), "src".to_string())]
        );
    }
}
