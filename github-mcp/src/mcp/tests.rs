//! Catalogue-wide tests for the dispatcher

use super::responses::response_text;
use super::tool_registry::{ParamKind, ToolContext, ToolRegistry};
use crate::github::mock::MockTransport;
use rmcp::model::CallToolResult;
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

fn setup() -> (ToolRegistry, Arc<MockTransport>, ToolContext) {
    let transport = MockTransport::new();
    let context = ToolContext::new(transport.client());
    (ToolRegistry::with_all_tools(), transport, context)
}

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn text(result: &CallToolResult) -> &str {
    response_text(result).expect("text content")
}

fn sample_value(kind: ParamKind) -> Value {
    match kind {
        ParamKind::String => json!("sample"),
        ParamKind::Number => json!(1),
        ParamKind::Boolean => json!(true),
    }
}

#[test]
fn test_catalogue_names_are_unique_and_described() {
    let registry = ToolRegistry::with_all_tools();
    let names = registry.list_tool_names();
    let unique: HashSet<&String> = names.iter().collect();

    assert_eq!(names.len(), unique.len());
    assert_eq!(registry.len(), 53);
    for tool in registry.iter() {
        assert!(!tool.description().is_empty(), "{} has no description", tool.name());
    }
}

#[test]
fn test_catalogue_contains_core_tools() {
    let registry = ToolRegistry::with_all_tools();
    for name in [
        "list_repositories",
        "create_repository",
        "get_repository",
        "list_issues",
        "create_issue",
        "list_my_repositories",
        "delete_repository",
        "list_branches",
        "list_pull_requests",
        "create_pull_request",
        "merge_pull_request",
        "get_authenticated_user",
        "get_rate_limit",
    ] {
        assert!(registry.get_tool(name).is_some(), "missing {name}");
    }
}

#[test]
fn test_schemas_match_parameters() {
    let registry = ToolRegistry::with_all_tools();
    for tool in registry.list_tools() {
        let declared = registry.get_tool(&tool.name).unwrap().parameters();
        let schema = &tool.input_schema;

        assert_eq!(schema["type"], "object");
        let required: Vec<&str> = declared
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(schema["required"], json!(required), "tool {}", tool.name);

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), declared.len(), "tool {}", tool.name);
        for spec in declared {
            assert_eq!(
                properties[spec.name]["type"],
                spec.kind.json_type(),
                "tool {} param {}",
                tool.name,
                spec.name
            );
        }
    }
}

#[tokio::test]
async fn test_every_required_parameter_is_enforced_before_any_request() {
    let (registry, transport, context) = setup();

    for tool in registry.iter() {
        let full: Map<String, Value> = tool
            .parameters()
            .iter()
            .map(|spec| (spec.name.to_string(), sample_value(spec.kind)))
            .collect();

        for spec in tool.parameters().iter().filter(|spec| spec.required) {
            let mut arguments = full.clone();
            arguments.remove(spec.name);

            let result = registry.dispatch(tool.name(), arguments, &context).await;
            assert_eq!(result.is_error, Some(true), "tool {}", tool.name());
            assert_eq!(
                text(&result),
                format!("Error: {} is required", spec.name),
                "tool {}",
                tool.name()
            );
        }
    }

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_tool() {
    let (registry, transport, context) = setup();

    let result = registry
        .dispatch("does_not_exist", object(json!({"owner": "a"})), &context)
        .await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text(&result), "Unknown tool: does_not_exist");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_list_issues_scenario() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!([
        {"number": 1, "title": "x"},
        {"number": 2, "title": "y"}
    ]));

    let result = registry
        .dispatch("list_issues", object(json!({"owner": "a", "repo": "b"})), &context)
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(text(&result), "1: x\n2: y");

    let request = transport.single_request();
    assert_eq!(request.path(), "/repos/a/b/issues");
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn test_create_issue_missing_title() {
    let (registry, transport, context) = setup();

    let result = registry
        .dispatch("create_issue", object(json!({"owner": "a", "repo": "b"})), &context)
        .await;

    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).contains("required"));
    assert_eq!(text(&result), "Error: title is required");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_listed_together() {
    let (registry, _transport, context) = setup();

    let result = registry.dispatch("create_issue", Map::new(), &context).await;
    assert_eq!(text(&result), "Error: owner, repo, and title are required");

    let result = registry.dispatch("list_branches", Map::new(), &context).await;
    assert_eq!(text(&result), "Error: owner and repo are required");
}

#[tokio::test]
async fn test_merge_refused_reports_failed() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!({"merged": false, "message": "Pull Request is not mergeable"}));

    let result = registry
        .dispatch(
            "merge_pull_request",
            object(json!({"owner": "a", "repo": "b", "pull_number": 9})),
            &context,
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    assert!(text(&result).ends_with("Failed"));
    assert_eq!(
        text(&result),
        "Pull Request is not mergeable\nMerge of pull request #9: Failed"
    );
}

#[tokio::test]
async fn test_merge_success() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!({"merged": true, "message": "Pull Request successfully merged"}));

    let result = registry
        .dispatch(
            "merge_pull_request",
            object(json!({"owner": "a", "repo": "b", "pull_number": 9, "merge_method": "squash"})),
            &context,
        )
        .await;

    assert!(text(&result).ends_with("Merge of pull request #9: Succeeded"));
    assert_eq!(
        transport.single_request().body,
        Some(json!({"merge_method": "squash"}))
    );
}

#[tokio::test]
async fn test_upstream_error_passes_through() {
    let (registry, transport, context) = setup();
    transport.fail_with(404, "Not Found");

    let result = registry
        .dispatch("get_repository", object(json!({"owner": "a", "repo": "b"})), &context)
        .await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text(&result), "Error: 404 Not Found");
}

#[tokio::test]
async fn test_wrong_shape_is_reported() {
    let (registry, transport, context) = setup();

    let result = registry
        .dispatch(
            "get_issue",
            object(json!({"owner": "a", "repo": "b", "issue_number": "abc"})),
            &context,
        )
        .await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text(&result), "Error: issue_number must be a number");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_empty_lists_yield_sentinels() {
    let repo = json!({"owner": "a", "repo": "b"});
    let pull = json!({"owner": "a", "repo": "b", "pull_number": 1});
    let issue = json!({"owner": "a", "repo": "b", "issue_number": 1});
    let query = json!({"query": "q"});
    let empty_search = json!({"total_count": 0, "incomplete_results": false, "items": []});

    let cases = [
        ("list_repositories", json!({"user": "u"}), json!([]), "No repositories found"),
        ("list_my_repositories", json!({}), json!([]), "No repositories found"),
        ("list_branches", repo.clone(), json!([]), "No branches found"),
        ("list_commits", repo.clone(), json!([]), "No commits found"),
        ("list_languages", repo.clone(), json!({}), "No languages found"),
        ("list_contributors", repo.clone(), Value::Null, "No contributors found"),
        ("list_collaborators", repo.clone(), json!([]), "No collaborators found"),
        ("list_issues", repo.clone(), json!([]), "No issues found"),
        ("list_issue_comments", issue, json!([]), "No comments found"),
        ("list_labels", repo.clone(), json!([]), "No labels found"),
        ("list_milestones", repo.clone(), json!([]), "No milestones found"),
        ("list_pull_requests", repo.clone(), json!([]), "No pull requests found"),
        ("list_pull_request_files", pull.clone(), json!([]), "No files found"),
        ("list_reviews", pull, json!([]), "No reviews found"),
        ("list_releases", repo.clone(), json!([]), "No releases found"),
        ("list_webhooks", repo.clone(), json!([]), "No webhooks found"),
        ("list_notifications", json!({}), json!([]), "No notifications found"),
        (
            "list_workflows",
            repo.clone(),
            json!({"total_count": 0, "workflows": []}),
            "No workflows found",
        ),
        (
            "list_workflow_runs",
            repo,
            json!({"total_count": 0, "workflow_runs": []}),
            "No workflow runs found",
        ),
        ("search_repositories", query.clone(), empty_search.clone(), "No repositories found"),
        ("search_issues", query.clone(), empty_search.clone(), "No issues found"),
        ("search_code", query, empty_search, "No code found"),
    ];

    for (tool, arguments, reply, sentinel) in cases {
        let (registry, transport, context) = setup();
        transport.respond_with(reply);

        let result = registry.dispatch(tool, object(arguments), &context).await;
        assert_eq!(result.is_error, Some(false), "tool {tool}");
        assert_eq!(text(&result), sentinel, "tool {tool}");
    }
}

#[tokio::test]
async fn test_list_tools_render_one_line_per_item() {
    let repo = json!({"owner": "a", "repo": "b"});
    let pull = json!({"owner": "a", "repo": "b", "pull_number": 1});
    let issue = json!({"owner": "a", "repo": "b", "issue_number": 1});
    let query = json!({"query": "q"});
    let repositories = json!([
        {"name": "alpha", "full_name": "me/alpha"},
        {"name": "beta", "full_name": "org/beta"}
    ]);

    let cases = [
        ("list_repositories", json!({"user": "u"}), repositories.clone(), "alpha\nbeta"),
        ("list_my_repositories", json!({}), repositories, "alpha\nbeta"),
        (
            "list_branches",
            repo.clone(),
            json!([{"name": "main"}, {"name": "dev"}]),
            "main\ndev",
        ),
        (
            "list_commits",
            repo.clone(),
            json!([{"sha": "0123456789abcdef", "commit": {"message": "Initial commit\n\nDetails"}}]),
            "0123456: Initial commit",
        ),
        (
            "list_languages",
            repo.clone(),
            json!({"Rust": 10, "C": 20}),
            "C: 20 bytes\nRust: 10 bytes",
        ),
        (
            "list_contributors",
            repo.clone(),
            json!([
                {"login": "mona", "contributions": 5},
                {"name": "Anon", "contributions": 1, "type": "Anonymous"}
            ]),
            "mona: 5 contributions\nAnon: 1 contributions",
        ),
        (
            "list_collaborators",
            repo.clone(),
            json!([
                {"login": "mona", "role_name": "admin"},
                {"login": "hubot", "permissions": {"push": true, "pull": true}}
            ]),
            "mona (admin)\nhubot (push)",
        ),
        (
            "list_issues",
            repo.clone(),
            json!([{"number": 3, "title": "Bug"}]),
            "3: Bug",
        ),
        (
            "list_issue_comments",
            issue,
            json!([
                {"id": 1, "user": {"login": "mona"}, "body": "Looks good\nwith detail"},
                {"id": 2, "user": null, "body": "Hi"}
            ]),
            "mona: Looks good\nghost: Hi",
        ),
        (
            "list_labels",
            repo.clone(),
            json!([{"name": "bug", "color": "d73a4a"}]),
            "bug (#d73a4a)",
        ),
        (
            "list_milestones",
            repo.clone(),
            json!([{"number": 1, "title": "v1", "state": "open"}]),
            "1: v1 (open)",
        ),
        (
            "list_pull_requests",
            repo.clone(),
            json!([{"number": 7, "title": "Add feature"}]),
            "7: Add feature",
        ),
        (
            "list_pull_request_files",
            pull.clone(),
            json!([{"filename": "src/lib.rs", "status": "modified", "additions": 3, "deletions": 1}]),
            "src/lib.rs (modified, +3/-1)",
        ),
        (
            "list_reviews",
            pull,
            json!([{"id": 80, "user": {"login": "mona"}, "state": "APPROVED"}]),
            "80: mona APPROVED",
        ),
        (
            "list_releases",
            repo.clone(),
            json!([
                {"id": 1, "tag_name": "v1.0.0", "name": "First"},
                {"id": 2, "tag_name": "v2.0.0-rc1", "name": "", "draft": true, "prerelease": true}
            ]),
            "v1.0.0: First\nv2.0.0-rc1: v2.0.0-rc1 [draft] [prerelease]",
        ),
        (
            "list_webhooks",
            repo.clone(),
            json!([
                {
                    "id": 1,
                    "active": true,
                    "events": ["push", "pull_request"],
                    "config": {"url": "https://example.com/hook"}
                },
                {"id": 2, "active": false, "events": [], "config": {}}
            ]),
            "1: https://example.com/hook [push, pull_request] (active)\n2: N/A [] (inactive)",
        ),
        (
            "list_notifications",
            json!({}),
            json!([{
                "id": "42",
                "reason": "mention",
                "subject": {"title": "Fix it", "type": "Issue"},
                "repository": {"full_name": "o/r"}
            }]),
            "42: [o/r] Fix it (mention)",
        ),
        (
            "list_workflows",
            repo.clone(),
            json!({"total_count": 1, "workflows": [{"id": 5, "name": "CI", "state": "active"}]}),
            "5: CI (active)",
        ),
        (
            "list_workflow_runs",
            repo,
            json!({"workflow_runs": [
                {"id": 9, "name": "CI", "run_number": 12, "status": "completed", "conclusion": "success"},
                {"id": 10, "run_number": 13, "status": "queued"}
            ]}),
            "9: CI #12 completed/success\n10: N/A #13 queued/N/A",
        ),
        (
            "search_repositories",
            query.clone(),
            json!({"items": [
                {"name": "x", "full_name": "o/x", "description": "Tool"},
                {"name": "y", "full_name": "o/y"}
            ]}),
            "o/x: Tool\no/y: No description",
        ),
        (
            "search_issues",
            query.clone(),
            json!({"items": [
                {"number": 4, "title": "Crash", "repository_url": "https://api.github.com/repos/o/r"}
            ]}),
            "o/r#4: Crash",
        ),
        (
            "search_code",
            query,
            json!({"items": [
                {"name": "lib.rs", "path": "src/lib.rs", "repository": {"full_name": "o/r"}}
            ]}),
            "o/r: src/lib.rs",
        ),
    ];

    for (tool, arguments, reply, expected) in cases {
        let (registry, transport, context) = setup();
        transport.respond_with(reply);

        let result = registry.dispatch(tool, object(arguments), &context).await;
        assert_eq!(result.is_error, Some(false), "tool {tool}");
        assert_eq!(text(&result), expected, "tool {tool}");
    }
}

#[tokio::test]
async fn test_formatting_is_deterministic() {
    let payload = json!({"Rust": 100, "Go": 100, "C": 5, "Shell": 5, "Python": 50});
    let mut outputs = Vec::new();

    for _ in 0..3 {
        let (registry, transport, context) = setup();
        transport.respond_with(payload.clone());
        let result = registry
            .dispatch("list_languages", object(json!({"owner": "a", "repo": "b"})), &context)
            .await;
        outputs.push(text(&result).to_string());
    }

    assert_eq!(
        outputs[0],
        "Go: 100 bytes\nRust: 100 bytes\nPython: 50 bytes\nC: 5 bytes\nShell: 5 bytes"
    );
    assert!(outputs.iter().all(|output| output == &outputs[0]));
}

#[tokio::test]
async fn test_explicit_false_is_forwarded_and_absent_is_not() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!([]));
    registry
        .dispatch("list_notifications", object(json!({"all": false})), &context)
        .await;
    assert_eq!(
        transport.single_request().query,
        vec![("all".to_string(), "false".to_string())]
    );

    let (registry, transport, context) = setup();
    transport.respond_with(json!({"number": 1, "title": "t", "html_url": "u"}));
    registry
        .dispatch(
            "create_issue",
            object(json!({"owner": "a", "repo": "b", "title": "t", "body": ""})),
            &context,
        )
        .await;
    assert_eq!(
        transport.single_request().body,
        Some(json!({"title": "t", "body": ""}))
    );

    let (registry, transport, context) = setup();
    transport.respond_with(json!({"number": 1, "title": "t", "html_url": "u"}));
    registry
        .dispatch(
            "create_issue",
            object(json!({"owner": "a", "repo": "b", "title": "t", "body": null})),
            &context,
        )
        .await;
    assert_eq!(transport.single_request().body, Some(json!({"title": "t"})));
}

#[tokio::test]
async fn test_get_file_contents_decodes_wrapped_base64() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!({
        "type": "file",
        "name": "hello.txt",
        "path": "hello.txt",
        "encoding": "base64",
        "content": "aGVsbG8g\nd29ybGQK\n"
    }));

    let result = registry
        .dispatch(
            "get_file_contents",
            object(json!({"owner": "a", "repo": "b", "path": "hello.txt"})),
            &context,
        )
        .await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(text(&result), "hello world\n");
}

#[tokio::test]
async fn test_decode_failure_is_an_error_result() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!({
        "type": "file",
        "name": "bin",
        "path": "bin",
        "encoding": "base64",
        "content": "//79"
    }));

    let result = registry
        .dispatch(
            "get_file_contents",
            object(json!({"owner": "a", "repo": "b", "path": "bin"})),
            &context,
        )
        .await;

    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).starts_with("Error: Decode error:"));
}

#[tokio::test]
async fn test_add_collaborator_outcomes() {
    let (registry, transport, context) = setup();
    transport.respond_with(json!({"id": 3, "permissions": "write"}));
    transport.respond_with(Value::Null);
    let arguments = object(json!({"owner": "a", "repo": "b", "username": "mona"}));

    let invited = registry
        .dispatch("add_collaborator", arguments.clone(), &context)
        .await;
    let existing = registry.dispatch("add_collaborator", arguments, &context).await;

    assert_eq!(text(&invited), "Invited mona to a/b");
    assert_eq!(text(&existing), "mona is already a collaborator on a/b");
}

#[tokio::test]
async fn test_delete_tools_confirm_target() {
    let (registry, transport, context) = setup();
    transport.respond_with(Value::Null);
    transport.respond_with(Value::Null);
    transport.respond_with(Value::Null);

    let repo = registry
        .dispatch("delete_repository", object(json!({"owner": "a", "repo": "b"})), &context)
        .await;
    let release = registry
        .dispatch(
            "delete_release",
            object(json!({"owner": "a", "repo": "b", "release_id": "42"})),
            &context,
        )
        .await;
    let thread = registry
        .dispatch("mark_thread_read", object(json!({"thread_id": 7})), &context)
        .await;

    assert_eq!(text(&repo), "Deleted repository a/b");
    assert_eq!(text(&release), "Deleted release 42");
    assert_eq!(text(&thread), "Marked thread 7 as read");

    let paths: Vec<String> = transport.requests().iter().map(|r| r.path()).collect();
    assert_eq!(
        paths,
        vec!["/repos/a/b", "/repos/a/b/releases/42", "/notifications/threads/7"]
    );
}
