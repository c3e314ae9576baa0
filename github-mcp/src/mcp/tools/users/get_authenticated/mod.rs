//! Tool for identifying the token owner

use crate::error::Result;
use crate::mcp::shared_utils::{key_value_summary, or_na};
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

/// Tool for showing the authenticated user
#[derive(Default)]
pub struct GetAuthenticatedUserTool;

impl GetAuthenticatedUserTool {
    /// Creates a new instance of the GetAuthenticatedUserTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetAuthenticatedUserTool {
    fn name(&self) -> &'static str {
        "get_authenticated_user"
    }

    fn description(&self) -> &'static str {
        "Get information about the authenticated user"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        &[]
    }

    async fn execute(&self, _arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let user = context.github.get_authenticated_user().await?;
        Ok(key_value_summary(&[
            ("Username", user.login.clone()),
            ("Name", or_na(user.name.as_deref()).to_string()),
            ("Email", or_na(user.email.as_deref()).to_string()),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_fields_render_as_na() {
        let transport = MockTransport::new();
        transport.respond_with(json!({"login": "octocat", "name": "The Octocat", "email": null}));
        let context = ToolContext::new(transport.client());

        let text = GetAuthenticatedUserTool::new()
            .execute(ToolArguments::default(), &context)
            .await
            .unwrap();
        assert_eq!(text, "Username: octocat\nName: The Octocat\nEmail: N/A");
    }
}
