//! Issue, comment, label and milestone endpoints

use super::models::{Comment, Issue, Label, Milestone};
use super::{repo_path, ApiRequest, GitHubClient};
use crate::error::Result;
use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/issues`
#[derive(Debug, Default, Serialize)]
pub struct CreateIssue {
    /// Issue title
    pub title: String,
    /// Markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Body of `PATCH /repos/{owner}/{repo}/issues/{number}`
#[derive(Debug, Default, Serialize)]
pub struct UpdateIssue {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New Markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `open` or `closed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Body of `POST /repos/{owner}/{repo}/labels`
#[derive(Debug, Default, Serialize)]
pub struct CreateLabel {
    /// Label name
    pub name: String,
    /// Hex color without the leading `#`
    pub color: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /repos/{owner}/{repo}/milestones`
#[derive(Debug, Default, Serialize)]
pub struct CreateMilestone {
    /// Milestone title
    pub title: String,
    /// Milestone description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/issues`
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: Option<&str>,
    ) -> Result<Vec<Issue>> {
        let request =
            ApiRequest::get(repo_path(owner, repo, &["issues"])).with_optional_query("state", state);
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/issues/{number}`
    pub async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue> {
        let number = number.to_string();
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["issues", number.as_str()])))
            .await
    }

    /// `POST /repos/{owner}/{repo}/issues`
    pub async fn create_issue(&self, owner: &str, repo: &str, body: &CreateIssue) -> Result<Issue> {
        self.fetch(ApiRequest::post(repo_path(owner, repo, &["issues"])).with_json(body)?)
            .await
    }

    /// `PATCH /repos/{owner}/{repo}/issues/{number}`
    pub async fn update_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &UpdateIssue,
    ) -> Result<Issue> {
        let number = number.to_string();
        let request =
            ApiRequest::patch(repo_path(owner, repo, &["issues", number.as_str()])).with_json(body)?;
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/issues/{number}/comments`
    pub async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Comment>> {
        let number = number.to_string();
        self.fetch(ApiRequest::get(repo_path(
            owner,
            repo,
            &["issues", number.as_str(), "comments"],
        )))
        .await
    }

    /// `POST /repos/{owner}/{repo}/issues/{number}/comments`
    pub async fn add_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<Comment> {
        let number = number.to_string();
        let request = ApiRequest::post(repo_path(owner, repo, &["issues", number.as_str(), "comments"]))
            .with_json(&CommentBody { body })?;
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/labels`
    pub async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["labels"])))
            .await
    }

    /// `POST /repos/{owner}/{repo}/labels`
    pub async fn create_label(&self, owner: &str, repo: &str, body: &CreateLabel) -> Result<Label> {
        self.fetch(ApiRequest::post(repo_path(owner, repo, &["labels"])).with_json(body)?)
            .await
    }

    /// `DELETE /repos/{owner}/{repo}/labels/{name}`
    pub async fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<()> {
        self.execute(ApiRequest::delete(repo_path(owner, repo, &["labels", name])))
            .await
    }

    /// `GET /repos/{owner}/{repo}/milestones`
    pub async fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        state: Option<&str>,
    ) -> Result<Vec<Milestone>> {
        let request = ApiRequest::get(repo_path(owner, repo, &["milestones"]))
            .with_optional_query("state", state);
        self.fetch(request).await
    }

    /// `POST /repos/{owner}/{repo}/milestones`
    pub async fn create_milestone(
        &self,
        owner: &str,
        repo: &str,
        body: &CreateMilestone,
    ) -> Result<Milestone> {
        self.fetch(ApiRequest::post(repo_path(owner, repo, &["milestones"])).with_json(body)?)
            .await
    }
}
