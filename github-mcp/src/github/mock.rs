//! In-memory transport used by tests
//!
//! Replies are queued up front and handed out in order; every request that
//! reaches the transport is recorded so tests can assert exactly what would
//! have been sent to GitHub.

use super::transport::{ApiRequest, GitHubTransport};
use super::GitHubClient;
use crate::error::{GitHubMcpError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum MockReply {
    Json(Value),
    Error { status: u16, message: String },
}

/// Transport returning canned replies
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Create a transport with no queued replies
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a successful JSON reply
    pub fn respond_with(&self, value: Value) {
        self.replies.lock().unwrap().push_back(MockReply::Json(value));
    }

    /// Queue an upstream failure
    pub fn fail_with(&self, status: u16, message: &str) {
        self.replies.lock().unwrap().push_back(MockReply::Error {
            status,
            message: message.to_string(),
        });
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request received; panics unless exactly one arrived
    pub fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }

    /// A client wired to this transport
    pub fn client(self: &Arc<Self>) -> GitHubClient {
        GitHubClient::new(self.clone())
    }
}

#[async_trait]
impl GitHubTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Json(value)) => Ok(value),
            Some(MockReply::Error { status, message }) => Err(GitHubMcpError::api(status, message)),
            None => Err(GitHubMcpError::api(599, "no mock reply queued")),
        }
    }
}
