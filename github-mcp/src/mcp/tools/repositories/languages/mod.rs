//! Tool for listing the languages of a repository

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO];

/// Tool for listing languages by byte count, largest first
#[derive(Default)]
pub struct ListLanguagesTool;

impl ListLanguagesTool {
    /// Creates a new instance of the ListLanguagesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListLanguagesTool {
    fn name(&self) -> &'static str {
        "list_languages"
    }

    fn description(&self) -> &'static str {
        "List the programming languages used in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let languages = context
            .github
            .list_languages(arguments.string("owner")?, arguments.string("repo")?)
            .await?;

        let mut ranked: Vec<(String, u64)> = languages.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(format_list(&ranked, "No languages found", |(language, bytes)| {
            format!("{language}: {bytes} bytes")
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_languages_sorted_by_size_then_name() {
        let transport = MockTransport::new();
        transport.respond_with(json!({"Shell": 10, "Rust": 900, "C": 10}));
        let context = ToolContext::new(transport.client());

        let arguments = ToolArguments::validate(
            PARAMETERS,
            json!({"owner": "o", "repo": "r"}).as_object().unwrap(),
        )
        .unwrap();
        let text = ListLanguagesTool::new().execute(arguments, &context).await.unwrap();

        assert_eq!(text, "Rust: 900 bytes\nC: 10 bytes\nShell: 10 bytes");
    }
}
