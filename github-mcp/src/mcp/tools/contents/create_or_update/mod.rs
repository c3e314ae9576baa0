//! Tool for committing a single file through the contents API

use crate::error::Result;
use crate::github::CreateOrUpdateFile;
use crate::mcp::shared_utils::{encode_base64, short_sha};
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("path", ParamKind::String, "Path of the file to write"),
    ParamSpec::required("message", ParamKind::String, "Commit message"),
    ParamSpec::required("content", ParamKind::String, "New file content as plain text"),
    ParamSpec::optional("branch", ParamKind::String, "Branch to commit to"),
    ParamSpec::optional(
        "sha",
        ParamKind::String,
        "Blob SHA of the file being replaced (required when updating)",
    ),
];

/// Tool for creating or replacing a file in one commit
#[derive(Default)]
pub struct CreateOrUpdateFileTool;

impl CreateOrUpdateFileTool {
    /// Creates a new instance of the CreateOrUpdateFileTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateOrUpdateFileTool {
    fn name(&self) -> &'static str {
        "create_or_update_file"
    }

    fn description(&self) -> &'static str {
        "Create or update a file in a repository with a single commit"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let path = arguments.string("path")?;
        let body = CreateOrUpdateFile {
            message: arguments.string("message")?.to_string(),
            content: encode_base64(arguments.string("content")?),
            branch: arguments.owned_string("branch"),
            sha: arguments.owned_string("sha"),
        };

        let result = context
            .github
            .create_or_update_file(
                arguments.string("owner")?,
                arguments.string("repo")?,
                path,
                &body,
            )
            .await?;
        tracing::info!("Committed {} to {}", result.commit.sha, path);
        Ok(format!("Committed {} to {}", short_sha(&result.commit.sha), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_content_is_base64_encoded() {
        let transport = MockTransport::new();
        transport.respond_with(json!({"commit": {"sha": "1234567890abcdef"}}));
        let context = ToolContext::new(transport.client());

        let arguments = ToolArguments::validate(
            PARAMETERS,
            json!({
                "owner": "o",
                "repo": "r",
                "path": "docs/notes.txt",
                "message": "Add notes",
                "content": "hello world"
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();
        let text = CreateOrUpdateFileTool::new()
            .execute(arguments, &context)
            .await
            .unwrap();

        assert_eq!(text, "Committed 1234567 to docs/notes.txt");
        let request = transport.single_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path(), "/repos/o/r/contents/docs/notes.txt");
        assert_eq!(
            request.body,
            Some(json!({"message": "Add notes", "content": "aGVsbG8gd29ybGQ="}))
        );
    }
}
