//! Tool for creating a repository for the authenticated user

use crate::error::Result;
use crate::github::CreateRepository;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    ParamSpec::required("name", ParamKind::String, "Repository name"),
    ParamSpec::optional("description", ParamKind::String, "Repository description"),
    ParamSpec::optional("private", ParamKind::Boolean, "Whether the repository is private"),
];

/// Tool for creating new repositories
#[derive(Default)]
pub struct CreateRepositoryTool;

impl CreateRepositoryTool {
    /// Creates a new instance of the CreateRepositoryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateRepositoryTool {
    fn name(&self) -> &'static str {
        "create_repository"
    }

    fn description(&self) -> &'static str {
        "Create a new repository for the authenticated user"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreateRepository {
            name: arguments.string("name")?.to_string(),
            description: arguments.owned_string("description"),
            private: arguments.optional_bool("private"),
        };

        let repository = context.github.create_repository(&body).await?;
        tracing::info!("Created repository {}", repository.full_name);
        Ok(format!("Created repository: {}", repository.html_url))
    }
}
