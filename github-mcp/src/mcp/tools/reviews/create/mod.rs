//! Tool for submitting a pull request review

use crate::error::Result;
use crate::github::CreateReview;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::pull_requests::PULL_NUMBER;
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    PULL_NUMBER,
    ParamSpec::required(
        "event",
        ParamKind::String,
        "Review action: APPROVE, REQUEST_CHANGES, or COMMENT",
    ),
    ParamSpec::optional("body", ParamKind::String, "Review comment"),
];

/// Tool for creating pull request reviews
#[derive(Default)]
pub struct CreateReviewTool;

impl CreateReviewTool {
    /// Creates a new instance of the CreateReviewTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateReviewTool {
    fn name(&self) -> &'static str {
        "create_review"
    }

    fn description(&self) -> &'static str {
        "Create a review on a pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreateReview {
            event: arguments.string("event")?.to_ascii_uppercase(),
            body: arguments.owned_string("body"),
        };

        let review = context
            .github
            .create_review(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.number("pull_number")?,
                &body,
            )
            .await?;
        tracing::info!("Created review {}", review.id);
        Ok(format!("Created review {} ({})", review.id, review.state))
    }
}
