//! Tool registry for MCP operations
//!
//! Every tool is declared once: a name, a description, a slice of
//! [`ParamSpec`]s and an `execute` body. The advertised JSON schema and the
//! argument validation are both derived from that slice, so the catalogue and
//! the dispatcher cannot drift apart.
//!
//! [`ToolRegistry::dispatch`] is the single error boundary. Whatever goes
//! wrong inside a tool comes back as a `CallToolResult` with `is_error` set;
//! nothing escapes as a protocol error.

use super::responses::{create_error_response, create_success_response};
use crate::error::{GitHubMcpError, Result};
use crate::github::GitHubClient;
use rmcp::model::{CallToolResult, Tool};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Primitive type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON string
    String,
    /// Non-negative integer (issue numbers, ids)
    Number,
    /// JSON boolean
    Boolean,
}

impl ParamKind {
    /// The JSON schema `type` keyword
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
        }
    }

    /// Coerce a present, non-null value to this kind
    fn coerce(&self, name: &str, value: &Value) -> Result<Value> {
        let coerced = match (self, value) {
            (ParamKind::String, Value::String(_)) => Some(value.clone()),
            (ParamKind::String, Value::Number(n)) => Some(Value::String(n.to_string())),
            (ParamKind::String, Value::Bool(b)) => Some(Value::String(b.to_string())),

            (ParamKind::Number, Value::Number(n)) => n
                .as_u64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                        .map(|f| f as u64)
                })
                .map(Value::from),
            (ParamKind::Number, Value::String(s)) => s.trim().parse::<u64>().ok().map(Value::from),

            (ParamKind::Boolean, Value::Bool(_)) => Some(value.clone()),
            (ParamKind::Boolean, Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },

            _ => None,
        };

        coerced.ok_or_else(|| {
            GitHubMcpError::validation(format!("{name} must be a {}", self.json_type()))
        })
    }
}

/// Declaration of a single tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Argument name as sent by the client
    pub name: &'static str,
    /// Declared primitive type
    pub kind: ParamKind,
    /// Whether the argument must be present
    pub required: bool,
    /// Human readable description for the schema
    pub description: &'static str,
}

impl ParamSpec {
    /// A required parameter
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// An optional parameter
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// Build the JSON schema advertised for a parameter list
pub fn schema_for(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    for spec in params {
        properties.insert(
            spec.name.to_string(),
            serde_json::json!({
                "type": spec.kind.json_type(),
                "description": spec.description,
            }),
        );
    }

    let required: Vec<&str> = params
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| spec.name)
        .collect();

    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// "a is required", "a and b are required", "a, b, and c are required"
fn required_message(missing: &[&str]) -> String {
    match missing {
        [] => String::new(),
        [one] => format!("{one} is required"),
        [first, second] => format!("{first} and {second} are required"),
        [init @ .., last] => format!("{}, and {last} are required", init.join(", ")),
    }
}

/// Arguments after validation against a tool's [`ParamSpec`]s
///
/// Only declared parameters survive, each coerced to its declared kind.
/// Optional parameters that were not provided (or were `null`) are absent;
/// explicit `false`, `0` and `""` are kept as provided values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: Map<String, Value>,
}

impl ToolArguments {
    /// Validate raw arguments against a parameter list
    pub fn validate(params: &[ParamSpec], raw: &Map<String, Value>) -> Result<Self> {
        let missing: Vec<&str> = params
            .iter()
            .filter(|spec| spec.required && raw.get(spec.name).map_or(true, Value::is_null))
            .map(|spec| spec.name)
            .collect();
        if !missing.is_empty() {
            return Err(GitHubMcpError::validation(required_message(&missing)));
        }

        let mut values = Map::new();
        for spec in params {
            match raw.get(spec.name) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    values.insert(spec.name.to_string(), spec.kind.coerce(spec.name, value)?);
                }
            }
        }

        Ok(Self { values })
    }

    fn missing(name: &str) -> GitHubMcpError {
        GitHubMcpError::validation(format!("{name} is required"))
    }

    /// Whether an argument was provided
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// A required string argument
    pub fn string(&self, name: &str) -> Result<&str> {
        self.optional_string(name).ok_or_else(|| Self::missing(name))
    }

    /// An optional string argument
    pub fn optional_string(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    /// An optional string argument, owned
    pub fn owned_string(&self, name: &str) -> Option<String> {
        self.optional_string(name).map(str::to_string)
    }

    /// A required numeric argument
    pub fn number(&self, name: &str) -> Result<u64> {
        self.optional_number(name).ok_or_else(|| Self::missing(name))
    }

    /// An optional numeric argument
    pub fn optional_number(&self, name: &str) -> Option<u64> {
        self.values.get(name).and_then(Value::as_u64)
    }

    /// An optional boolean argument
    pub fn optional_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(Value::as_bool)
    }
}

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// Client for the GitHub REST API
    pub github: GitHubClient,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(github: GitHubClient) -> Self {
        Self { github }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's parameter declarations
    fn parameters(&self) -> &'static [ParamSpec];

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> Value {
        schema_for(self.parameters())
    }

    /// Execute the tool with validated arguments, returning the text to show
    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String>;
}

/// Registry for managing MCP tools, in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn McpTool>>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the full GitHub catalogue
    pub fn with_all_tools() -> Self {
        let mut registry = Self::new();
        register_repository_tools(&mut registry);
        register_issue_tools(&mut registry);
        register_pull_request_tools(&mut registry);
        register_release_tools(&mut registry);
        register_webhook_tools(&mut registry);
        register_notification_tools(&mut registry);
        register_workflow_tools(&mut registry);
        register_search_tools(&mut registry);
        register_user_tools(&mut registry);
        registry
    }

    /// Register a tool in the registry; a tool with the same name is replaced
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name();
        match self.index.get(name) {
            Some(&position) => self.tools[position] = Box::new(tool),
            None => {
                self.index.insert(name, self.tools.len());
                self.tools.push(Box::new(tool));
            }
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.index
            .get(name)
            .map(|&position| self.tools[position].as_ref())
    }

    /// Iterate over the registered tools in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn McpTool> {
        self.tools.iter().map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.iter().map(|tool| tool.name().to_string()).collect()
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.iter()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve, validate, execute and format one tool call.
    ///
    /// Unknown names yield `Unknown tool: <name>`; every other failure yields
    /// `Error: <message>`. Both come back with `is_error: Some(true)`.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> CallToolResult {
        let Some(tool) = self.get_tool(name) else {
            tracing::warn!("Unknown tool requested: {}", name);
            return create_error_response(GitHubMcpError::UnknownTool(name.to_string()).to_string());
        };

        tracing::debug!("Dispatching tool '{}'", name);
        let outcome = match ToolArguments::validate(tool.parameters(), &arguments) {
            Ok(arguments) => tool.execute(arguments, context).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(text) => create_success_response(text),
            Err(e) => {
                if e.is_local() {
                    tracing::debug!("Tool '{}' rejected its arguments: {}", name, e);
                } else {
                    tracing::error!("Tool '{}' failed: {}", name, e);
                }
                create_error_response(format!("Error: {e}"))
            }
        }
    }
}

/// Tool registration functions for organizing tools by category
/// Register repository, collaborator and contents tools
pub fn register_repository_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::{collaborators, contents, repositories};
    repositories::register_repository_tools(registry);
    collaborators::register_collaborator_tools(registry);
    contents::register_contents_tools(registry);
}

/// Register issue, label and milestone tools
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::{issues, labels, milestones};
    issues::register_issue_tools(registry);
    labels::register_label_tools(registry);
    milestones::register_milestone_tools(registry);
}

/// Register pull request and review tools
pub fn register_pull_request_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::{pull_requests, reviews};
    pull_requests::register_pull_request_tools(registry);
    reviews::register_review_tools(registry);
}

/// Register release tools
pub fn register_release_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::releases::register_release_tools(registry);
}

/// Register webhook tools
pub fn register_webhook_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::webhooks::register_webhook_tools(registry);
}

/// Register notification tools
pub fn register_notification_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::notifications::register_notification_tools(registry);
}

/// Register GitHub Actions workflow tools
pub fn register_workflow_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::workflows::register_workflow_tools(registry);
}

/// Register search tools
pub fn register_search_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::search::register_search_tools(registry);
}

/// Register user and rate limit tools
pub fn register_user_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::users::register_user_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockTransport;
    use rmcp::model::RawContent;
    use serde_json::json;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::required("owner", ParamKind::String, "Repository owner"),
        ParamSpec::required("number", ParamKind::Number, "Issue number"),
        ParamSpec::optional("draft", ParamKind::Boolean, "Draft flag"),
        ParamSpec::optional("body", ParamKind::String, "Body text"),
    ];

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
        fail_with: Option<u16>,
    }

    impl MockTool {
        fn named(name: &'static str) -> Self {
            Self {
                name,
                description: "A test tool",
                fail_with: None,
            }
        }
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn parameters(&self) -> &'static [ParamSpec] {
            PARAMS
        }

        async fn execute(&self, arguments: ToolArguments, _context: &ToolContext) -> Result<String> {
            if let Some(status) = self.fail_with {
                return Err(GitHubMcpError::api(status, "Not Found"));
            }
            Ok(format!(
                "{} #{}",
                arguments.string("owner")?,
                arguments.number("number")?
            ))
        }
    }

    fn context() -> ToolContext {
        ToolContext::new(MockTransport::new().client())
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("Expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_preserves_order() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::named("zeta"));
        registry.register(MockTool::named("alpha"));
        registry.register(MockTool::named("mid"));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.list_tool_names(), vec!["zeta", "alpha", "mid"]);
        assert!(registry.get_tool("alpha").is_some());
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::named("one"));
        registry.register(MockTool::named("two"));
        registry.register(MockTool {
            name: "one",
            description: "Replacement",
            fail_with: None,
        });

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list_tool_names(), vec!["one", "two"]);
        assert_eq!(registry.get_tool("one").unwrap().description(), "Replacement");
    }

    #[test]
    fn test_schema_derived_from_params() {
        let schema = schema_for(PARAMS);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["owner", "number"]));
        assert_eq!(schema["properties"]["number"]["type"], "number");
        assert_eq!(schema["properties"]["draft"]["type"], "boolean");
        assert_eq!(schema["properties"]["body"]["description"], "Body text");
    }

    #[test]
    fn test_list_tools_exposes_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::named("mock"));

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "mock");
        assert_eq!(tools[0].description.as_deref(), Some("A test tool"));
        assert_eq!(tools[0].input_schema["required"], json!(["owner", "number"]));
    }

    #[test]
    fn test_required_message_grammar() {
        assert_eq!(required_message(&["title"]), "title is required");
        assert_eq!(required_message(&["owner", "repo"]), "owner and repo are required");
        assert_eq!(
            required_message(&["owner", "repo", "title"]),
            "owner, repo, and title are required"
        );
    }

    #[test]
    fn test_validate_reports_all_missing() {
        let error = ToolArguments::validate(PARAMS, &Map::new()).unwrap_err();
        assert_eq!(error.to_string(), "owner and number are required");
    }

    #[test]
    fn test_validate_treats_null_as_missing() {
        let raw = args(json!({"owner": null, "number": 1}));
        let error = ToolArguments::validate(PARAMS, &raw).unwrap_err();
        assert_eq!(error.to_string(), "owner is required");
    }

    #[test]
    fn test_validate_coerces_primitives() {
        let raw = args(json!({"owner": 42, "number": "7", "draft": "TRUE", "body": true}));
        let arguments = ToolArguments::validate(PARAMS, &raw).unwrap();

        assert_eq!(arguments.string("owner").unwrap(), "42");
        assert_eq!(arguments.number("number").unwrap(), 7);
        assert_eq!(arguments.optional_bool("draft"), Some(true));
        assert_eq!(arguments.optional_string("body"), Some("true"));
    }

    #[test]
    fn test_validate_accepts_integral_floats() {
        let raw = args(json!({"owner": "o", "number": 3.0}));
        let arguments = ToolArguments::validate(PARAMS, &raw).unwrap();
        assert_eq!(arguments.number("number").unwrap(), 3);
    }

    #[test]
    fn test_validate_rejects_wrong_shapes() {
        let raw = args(json!({"owner": "o", "number": "seven"}));
        let error = ToolArguments::validate(PARAMS, &raw).unwrap_err();
        assert_eq!(error.to_string(), "number must be a number");

        let raw = args(json!({"owner": "o", "number": -1}));
        assert!(ToolArguments::validate(PARAMS, &raw).is_err());

        let raw = args(json!({"owner": ["o"], "number": 1}));
        let error = ToolArguments::validate(PARAMS, &raw).unwrap_err();
        assert_eq!(error.to_string(), "owner must be a string");

        let raw = args(json!({"owner": "o", "number": 1, "draft": "maybe"}));
        let error = ToolArguments::validate(PARAMS, &raw).unwrap_err();
        assert_eq!(error.to_string(), "draft must be a boolean");
    }

    #[test]
    fn test_validate_keeps_explicit_falsy_values() {
        let raw = args(json!({"owner": "o", "number": 0, "draft": false, "body": ""}));
        let arguments = ToolArguments::validate(PARAMS, &raw).unwrap();

        assert_eq!(arguments.number("number").unwrap(), 0);
        assert_eq!(arguments.optional_bool("draft"), Some(false));
        assert_eq!(arguments.optional_string("body"), Some(""));
    }

    #[test]
    fn test_validate_drops_undeclared_and_absent() {
        let raw = args(json!({"owner": "o", "number": 1, "extra": "x", "body": null}));
        let arguments = ToolArguments::validate(PARAMS, &raw).unwrap();

        assert!(!arguments.contains("extra"));
        assert!(!arguments.contains("body"));
        assert!(!arguments.contains("draft"));
    }

    #[tokio::test]
    async fn test_dispatch_success() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::named("mock"));

        let result = registry
            .dispatch("mock", args(json!({"owner": "a", "number": 5})), &context())
            .await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "a #5");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = ToolRegistry::new();

        let result = registry.dispatch("nope", Map::new(), &context()).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_dispatch_validation_error() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::named("mock"));

        let result = registry
            .dispatch("mock", args(json!({"owner": "a"})), &context())
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: number is required");
    }

    #[tokio::test]
    async fn test_dispatch_upstream_error_passes_message_through() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "failing",
            description: "Always fails",
            fail_with: Some(404),
        });

        let result = registry
            .dispatch("failing", args(json!({"owner": "a", "number": 1})), &context())
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: 404 Not Found");
    }
}
