//! Configuration loaded from the process environment
//!
//! The server has very little to configure: where the GitHub API lives, which
//! token to send, and how long to wait for a connection. All of it comes from
//! environment variables read once at startup.

use crate::error::{GitHubMcpError, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL (GitHub Enterprise)
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Environment variable holding the connect timeout in seconds
pub const TIMEOUT_ENV: &str = "GITHUB_MCP_TIMEOUT_SECS";

/// Default public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Load an environment variable with a string default
fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable as an Option<T>
fn load_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Settings for talking to the GitHub REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    /// Personal access token. Absence is not validated; GitHub decides.
    pub token: Option<String>,
    /// Base URL of the REST API, without trailing slash
    pub api_url: String,
    /// Optional connect timeout for the HTTP client
    pub connect_timeout: Option<Duration>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            connect_timeout: None,
        }
    }
}

impl GitHubConfig {
    /// Read configuration from `GITHUB_TOKEN`, `GITHUB_API_URL` and
    /// `GITHUB_MCP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty());
        let api_url = load_env_string(API_URL_ENV, DEFAULT_API_URL);
        let connect_timeout = load_env_optional::<u64>(TIMEOUT_ENV).map(Duration::from_secs);

        Self {
            token,
            api_url,
            connect_timeout,
        }
        .validated()
    }

    /// Replace the API base URL, validating it
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Result<Self> {
        self.api_url = api_url.into();
        self.validated()
    }

    /// Replace the token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn validated(mut self) -> Result<Self> {
        let parsed = Url::parse(&self.api_url).map_err(|e| {
            GitHubMcpError::Config(format!("invalid API URL '{}': {e}", self.api_url))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GitHubMcpError::Config(format!(
                "API URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        self.api_url = self.api_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}
