//! Authenticated user and rate limit endpoints

use super::models::{RateLimit, User};
use super::{ApiRequest, GitHubClient};
use crate::error::Result;

impl GitHubClient {
    /// `GET /user`
    pub async fn get_authenticated_user(&self) -> Result<User> {
        self.fetch(ApiRequest::get(["user"])).await
    }

    /// `GET /rate_limit`
    pub async fn get_rate_limit(&self) -> Result<RateLimit> {
        self.fetch(ApiRequest::get(["rate_limit"])).await
    }
}
