//! Pull request and review endpoints

use super::models::{MergeResult, PullRequest, PullRequestFile, Review};
use super::{repo_path, ApiRequest, GitHubClient};
use crate::error::Result;
use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/pulls`
#[derive(Debug, Default, Serialize)]
pub struct CreatePullRequest {
    /// Pull request title
    pub title: String,
    /// Branch holding the changes, `owner:branch` across forks
    pub head: String,
    /// Branch the changes merge into
    pub base: String,
    /// Markdown description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Open as a draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
}

/// Body of `PATCH /repos/{owner}/{repo}/pulls/{number}`
#[derive(Debug, Default, Serialize)]
pub struct UpdatePullRequest {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New Markdown description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `open` or `closed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// New base branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Body of `PUT /repos/{owner}/{repo}/pulls/{number}/merge`
#[derive(Debug, Default, Serialize)]
pub struct MergePullRequest {
    /// Title of the merge commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_title: Option<String>,
    /// Extra detail appended to the merge commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// `merge`, `squash` or `rebase`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<String>,
}

/// Body of `POST /repos/{owner}/{repo}/pulls/{number}/reviews`
#[derive(Debug, Default, Serialize)]
pub struct CreateReview {
    /// `APPROVE`, `REQUEST_CHANGES` or `COMMENT`
    pub event: String,
    /// Review comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/pulls`
    pub async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        state: Option<&str>,
    ) -> Result<Vec<PullRequest>> {
        let request =
            ApiRequest::get(repo_path(owner, repo, &["pulls"])).with_optional_query("state", state);
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/pulls/{number}`
    pub async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest> {
        let number = number.to_string();
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["pulls", number.as_str()])))
            .await
    }

    /// `POST /repos/{owner}/{repo}/pulls`
    pub async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        body: &CreatePullRequest,
    ) -> Result<PullRequest> {
        self.fetch(ApiRequest::post(repo_path(owner, repo, &["pulls"])).with_json(body)?)
            .await
    }

    /// `PATCH /repos/{owner}/{repo}/pulls/{number}`
    pub async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &UpdatePullRequest,
    ) -> Result<PullRequest> {
        let number = number.to_string();
        let request =
            ApiRequest::patch(repo_path(owner, repo, &["pulls", number.as_str()])).with_json(body)?;
        self.fetch(request).await
    }

    /// `PUT /repos/{owner}/{repo}/pulls/{number}/merge`
    pub async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &MergePullRequest,
    ) -> Result<MergeResult> {
        let number = number.to_string();
        let request = ApiRequest::put(repo_path(owner, repo, &["pulls", number.as_str(), "merge"]))
            .with_json(body)?;
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/pulls/{number}/files`
    pub async fn list_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<PullRequestFile>> {
        let number = number.to_string();
        self.fetch(ApiRequest::get(repo_path(
            owner,
            repo,
            &["pulls", number.as_str(), "files"],
        )))
        .await
    }

    /// `GET /repos/{owner}/{repo}/pulls/{number}/reviews`
    pub async fn list_reviews(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Review>> {
        let number = number.to_string();
        self.fetch(ApiRequest::get(repo_path(
            owner,
            repo,
            &["pulls", number.as_str(), "reviews"],
        )))
        .await
    }

    /// `POST /repos/{owner}/{repo}/pulls/{number}/reviews`
    pub async fn create_review(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &CreateReview,
    ) -> Result<Review> {
        let number = number.to_string();
        let request = ApiRequest::post(repo_path(owner, repo, &["pulls", number.as_str(), "reviews"]))
            .with_json(body)?;
        self.fetch(request).await
    }
}
