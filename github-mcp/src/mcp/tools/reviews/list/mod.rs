//! Tool for listing reviews on a pull request

use crate::error::Result;
use crate::mcp::shared_utils::format_list;
use crate::mcp::tool_registry::{McpTool, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::pull_requests::PULL_NUMBER;
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[OWNER, REPO, PULL_NUMBER];

/// Tool for listing reviews as `<id>: <login> <state>` lines
#[derive(Default)]
pub struct ListReviewsTool;

impl ListReviewsTool {
    /// Creates a new instance of the ListReviewsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListReviewsTool {
    fn name(&self) -> &'static str {
        "list_reviews"
    }

    fn description(&self) -> &'static str {
        "List reviews on a pull request"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let reviews = context
            .github
            .list_reviews(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.number("pull_number")?,
            )
            .await?;
        Ok(format_list(&reviews, "No reviews found", |review| {
            format!(
                "{}: {} {}",
                review.id,
                review.user.as_ref().map_or("ghost", |u| u.login.as_str()),
                review.state
            )
        }))
    }
}
