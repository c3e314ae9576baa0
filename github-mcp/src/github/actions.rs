//! GitHub Actions workflow endpoints

use super::models::{WorkflowList, WorkflowRunList};
use super::{repo_path, ApiRequest, GitHubClient};
use crate::error::Result;
use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/actions/workflows/{id}/dispatches`
#[derive(Debug, Default, Serialize)]
pub struct WorkflowDispatch {
    /// Branch or tag the workflow runs on
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/actions/workflows`
    pub async fn list_workflows(&self, owner: &str, repo: &str) -> Result<WorkflowList> {
        self.fetch(ApiRequest::get(repo_path(
            owner,
            repo,
            &["actions", "workflows"],
        )))
        .await
    }

    /// `GET /repos/{owner}/{repo}/actions/runs`, or the runs of one workflow
    /// when `workflow_id` (numeric id or file name) is given
    pub async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: Option<&str>,
        branch: Option<&str>,
    ) -> Result<WorkflowRunList> {
        let segments = match workflow_id {
            Some(workflow_id) => repo_path(owner, repo, &["actions", "workflows", workflow_id, "runs"]),
            None => repo_path(owner, repo, &["actions", "runs"]),
        };
        let request = ApiRequest::get(segments).with_optional_query("branch", branch);
        self.fetch(request).await
    }

    /// `POST /repos/{owner}/{repo}/actions/workflows/{id}/dispatches`
    pub async fn dispatch_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_id: &str,
        body: &WorkflowDispatch,
    ) -> Result<()> {
        let request = ApiRequest::post(repo_path(
            owner,
            repo,
            &["actions", "workflows", workflow_id, "dispatches"],
        ))
        .with_json(body)?;
        self.execute(request).await
    }
}
