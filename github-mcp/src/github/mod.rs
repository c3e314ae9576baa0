//! Typed client for the GitHub REST API
//!
//! [`GitHubClient`] exposes one async method per endpoint the tools use. Each
//! method builds a single [`ApiRequest`] and hands it to the configured
//! [`GitHubTransport`]; nothing is cached, retried or paginated.

mod actions;
mod activity;
mod hooks;
mod issues;
pub mod models;
mod pulls;
mod releases;
mod repos;
mod search;
pub mod transport;
mod users;

#[cfg(test)]
pub mod mock;

pub use actions::WorkflowDispatch;
pub use hooks::{CreateHook, CreateHookConfig};
pub use issues::{CreateIssue, CreateLabel, CreateMilestone, UpdateIssue};
pub use pulls::{CreatePullRequest, CreateReview, MergePullRequest, UpdatePullRequest};
pub use releases::CreateRelease;
pub use repos::{CreateOrUpdateFile, CreateRepository, UpdateRepository};
pub use transport::{ApiRequest, GitHubTransport, RestTransport};

use crate::config::GitHubConfig;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Handle on the GitHub API shared by every tool invocation
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn GitHubTransport>,
}

impl GitHubClient {
    /// Create a client over an arbitrary transport
    pub fn new(transport: Arc<dyn GitHubTransport>) -> Self {
        Self { transport }
    }

    /// Create a client that talks HTTP using the given configuration
    pub fn from_config(config: &GitHubConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(RestTransport::new(config)?)))
    }

    /// Send a request and return the raw JSON
    pub async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.transport.send(request).await
    }

    /// Send a request and decode the JSON into `T`
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.transport.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send a request whose response body is irrelevant
    pub async fn execute(&self, request: ApiRequest) -> Result<()> {
        self.transport.send(request).await.map(|_| ())
    }
}

/// `["repos", owner, repo, ...rest]`
pub(crate) fn repo_path<'a>(owner: &'a str, repo: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut segments = vec!["repos", owner, repo];
    segments.extend_from_slice(rest);
    segments
}
