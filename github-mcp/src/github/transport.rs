//! HTTP transport for the GitHub REST API
//!
//! Endpoint methods on [`GitHubClient`](super::GitHubClient) describe a call
//! as an [`ApiRequest`]; a [`GitHubTransport`] turns it into JSON. The
//! production transport is [`RestTransport`], built on `reqwest`.

use crate::config::GitHubConfig;
use crate::error::{GitHubMcpError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Media type requested from GitHub
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned in every request
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// A single call against the GitHub REST API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Unencoded path segments, e.g. `["repos", "octo", "hello"]`
    pub segments: Vec<String>,
    /// Query string pairs, in insertion order
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request for the given method and path segments
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            method,
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// GET request
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::GET, segments)
    }

    /// POST request
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::POST, segments)
    }

    /// PUT request
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::PUT, segments)
    }

    /// PATCH request
    pub fn patch<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::PATCH, segments)
    }

    /// DELETE request
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Append a slash-separated path (such as a file path) as individual segments
    pub fn with_path(mut self, path: &str) -> Self {
        self.segments.extend(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value was provided
    pub fn with_optional_query<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// The path as sent, joined with `/` (unencoded)
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Sends [`ApiRequest`]s to GitHub
#[async_trait]
pub trait GitHubTransport: Send + Sync {
    /// Perform the request, returning the decoded JSON body.
    ///
    /// Responses without a body (such as `204 No Content`) decode to `Value::Null`.
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// `reqwest`-backed transport for the public or an enterprise GitHub API
pub struct RestTransport {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl RestTransport {
    /// Build a transport from configuration
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            GitHubMcpError::Config(format!("invalid API URL '{}': {e}", config.api_url))
        })?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("github-mcp/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            token: config.token.clone(),
        })
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GitHubMcpError::Config(format!("API URL '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

#[async_trait]
impl GitHubTransport for RestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let error = api_error(status, &text);
            tracing::warn!("{} {} failed: {}", request.method, request.path(), error);
            return Err(error);
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Convert a non-success response into an upstream error.
///
/// GitHub puts a human message in the body's `message` field; fall back to
/// the canonical reason phrase when the body has none.
pub fn api_error(status: StatusCode, body: &str) -> GitHubMcpError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());

    GitHubMcpError::api(status.as_u16(), message)
}
