//! Search endpoints

use super::models::{CodeSearchItem, IssueSearchItem, Repository, SearchResults};
use super::{ApiRequest, GitHubClient};
use crate::error::Result;

impl GitHubClient {
    /// `GET /search/repositories?q=`
    pub async fn search_repositories(&self, query: &str) -> Result<SearchResults<Repository>> {
        self.fetch(ApiRequest::get(["search", "repositories"]).with_query("q", query))
            .await
    }

    /// `GET /search/issues?q=`
    pub async fn search_issues(&self, query: &str) -> Result<SearchResults<IssueSearchItem>> {
        self.fetch(ApiRequest::get(["search", "issues"]).with_query("q", query))
            .await
    }

    /// `GET /search/code?q=`
    pub async fn search_code(&self, query: &str) -> Result<SearchResults<CodeSearchItem>> {
        self.fetch(ApiRequest::get(["search", "code"]).with_query("q", query))
            .await
    }
}
