//! Tool for creating a webhook

use crate::error::Result;
use crate::github::{CreateHook, CreateHookConfig};
use crate::mcp::shared_utils::split_csv;
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("url", ParamKind::String, "Payload delivery URL"),
    ParamSpec::optional("content_type", ParamKind::String, "Payload format: json or form"),
    ParamSpec::optional("secret", ParamKind::String, "Secret used to sign payloads"),
    ParamSpec::optional(
        "events",
        ParamKind::String,
        "Comma-separated events that trigger the hook, e.g. push,pull_request",
    ),
    ParamSpec::optional("active", ParamKind::Boolean, "Whether deliveries are enabled"),
];

/// Tool for creating repository webhooks
#[derive(Default)]
pub struct CreateWebhookTool;

impl CreateWebhookTool {
    /// Creates a new instance of the CreateWebhookTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateWebhookTool {
    fn name(&self) -> &'static str {
        "create_webhook"
    }

    fn description(&self) -> &'static str {
        "Create a webhook on a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let body = CreateHook {
            config: CreateHookConfig {
                url: arguments.string("url")?.to_string(),
                content_type: arguments.owned_string("content_type"),
                secret: arguments.owned_string("secret"),
            },
            events: arguments.optional_string("events").map(split_csv),
            active: arguments.optional_bool("active"),
        };

        let hook = context
            .github
            .create_hook(arguments.string("owner")?, arguments.string("repo")?, &body)
            .await?;
        tracing::info!("Created webhook {}", hook.id);
        Ok(format!("Created webhook {}", hook.id))
    }
}
