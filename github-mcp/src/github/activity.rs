//! Notification endpoints

use super::models::Notification;
use super::{ApiRequest, GitHubClient};
use crate::error::Result;

impl GitHubClient {
    /// `GET /notifications`
    pub async fn list_notifications(
        &self,
        all: Option<bool>,
        participating: Option<bool>,
    ) -> Result<Vec<Notification>> {
        let request = ApiRequest::get(["notifications"])
            .with_optional_query("all", all)
            .with_optional_query("participating", participating);
        self.fetch(request).await
    }

    /// `PUT /notifications`
    pub async fn mark_notifications_read(&self) -> Result<()> {
        self.execute(ApiRequest::put(["notifications"])).await
    }

    /// `PATCH /notifications/threads/{id}`
    pub async fn mark_thread_read(&self, thread_id: u64) -> Result<()> {
        let thread_id = thread_id.to_string();
        self.execute(ApiRequest::patch(["notifications", "threads", thread_id.as_str()]))
            .await
    }
}
