//! Release endpoints

use super::models::Release;
use super::{repo_path, ApiRequest, GitHubClient};
use crate::error::Result;
use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/releases`
#[derive(Debug, Default, Serialize)]
pub struct CreateRelease {
    /// Tag to release; created from `target_commitish` if missing
    pub tag_name: String,
    /// Release title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Branch or commit the new tag points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Create an unpublished draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    /// Mark as a prerelease
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/releases`
    pub async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["releases"])))
            .await
    }

    /// `GET /repos/{owner}/{repo}/releases/latest`
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Release> {
        self.fetch(ApiRequest::get(repo_path(
            owner,
            repo,
            &["releases", "latest"],
        )))
        .await
    }

    /// `POST /repos/{owner}/{repo}/releases`
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        body: &CreateRelease,
    ) -> Result<Release> {
        self.fetch(ApiRequest::post(repo_path(owner, repo, &["releases"])).with_json(body)?)
            .await
    }

    /// `DELETE /repos/{owner}/{repo}/releases/{id}`
    pub async fn delete_release(&self, owner: &str, repo: &str, release_id: u64) -> Result<()> {
        let release_id = release_id.to_string();
        self.execute(ApiRequest::delete(repo_path(
            owner,
            repo,
            &["releases", release_id.as_str()],
        )))
        .await
    }
}
