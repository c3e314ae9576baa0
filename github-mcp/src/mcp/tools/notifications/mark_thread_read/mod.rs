//! Tool for marking one notification thread as read

use crate::error::Result;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[ParamSpec::required(
    "thread_id",
    ParamKind::Number,
    "Notification thread id",
)];

/// Tool for marking a single thread as read
#[derive(Default)]
pub struct MarkThreadReadTool;

impl MarkThreadReadTool {
    /// Creates a new instance of the MarkThreadReadTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for MarkThreadReadTool {
    fn name(&self) -> &'static str {
        "mark_thread_read"
    }

    fn description(&self) -> &'static str {
        "Mark a notification thread as read"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let thread_id = arguments.number("thread_id")?;
        context.github.mark_thread_read(thread_id).await?;
        Ok(format!("Marked thread {thread_id} as read"))
    }
}
