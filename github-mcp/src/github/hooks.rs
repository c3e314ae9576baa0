//! Repository webhook endpoints

use super::models::Hook;
use super::{repo_path, ApiRequest, GitHubClient};
use crate::error::Result;
use serde::Serialize;

/// Delivery settings sent when creating a hook
#[derive(Debug, Default, Serialize)]
pub struct CreateHookConfig {
    /// URL that receives the payloads
    pub url: String,
    /// `json` or `form`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Shared secret used to sign deliveries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Body of `POST /repos/{owner}/{repo}/hooks`
#[derive(Debug, Default, Serialize)]
pub struct CreateHook {
    /// Where and how payloads are delivered
    pub config: CreateHookConfig,
    /// Events that trigger the hook; GitHub defaults to `push`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// Whether deliveries are sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/hooks`
    pub async fn list_hooks(&self, owner: &str, repo: &str) -> Result<Vec<Hook>> {
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["hooks"])))
            .await
    }

    /// `POST /repos/{owner}/{repo}/hooks`
    pub async fn create_hook(&self, owner: &str, repo: &str, body: &CreateHook) -> Result<Hook> {
        self.fetch(ApiRequest::post(repo_path(owner, repo, &["hooks"])).with_json(body)?)
            .await
    }

    /// `DELETE /repos/{owner}/{repo}/hooks/{id}`
    pub async fn delete_hook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<()> {
        let hook_id = hook_id.to_string();
        self.execute(ApiRequest::delete(repo_path(owner, repo, &["hooks", hook_id.as_str()])))
            .await
    }
}
