//! Tool for fetching a repository's full metadata

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool returning the repository document as pretty-printed JSON
#[derive(Default)]
pub struct GetRepositoryTool;

impl GetRepositoryTool {
    /// Creates a new instance of the GetRepositoryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetRepositoryTool {
    fn name(&self) -> &'static str {
        "get_repository"
    }

    fn description(&self) -> &'static str {
        "Get details about a GitHub repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let repository = context
            .github
            .get_repository(arguments.string("owner")?, arguments.string("repo")?)
            .await?;
        Ok(serde_json::to_string_pretty(&repository)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_repository_pretty_prints_verbatim() {
        let transport = MockTransport::new();
        transport.respond_with(json!({"name": "hello", "stargazers_count": 3}));
        let context = ToolContext::new(transport.client());

        let arguments = ToolArguments::validate(
            PARAMETERS,
            json!({"owner": "octo", "repo": "hello"}).as_object().unwrap(),
        )
        .unwrap();
        let text = GetRepositoryTool::new().execute(arguments, &context).await.unwrap();

        assert_eq!(text, "{\n  \"name\": \"hello\",\n  \"stargazers_count\": 3\n}");
        assert_eq!(transport.single_request().path(), "/repos/octo/hello");
    }
}
