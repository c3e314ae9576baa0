//! Unified error handling for the GitHub MCP library
//!
//! Every failure a tool can hit (bad arguments, unknown tool names, upstream
//! API failures, transport problems) is represented by [`GitHubMcpError`].
//! The dispatcher renders all of them the same way, so the `Display` output
//! of each variant is what the client ends up reading.

use thiserror::Error;

/// The main error type for the GitHub MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GitHubMcpError {
    /// A required argument was missing or had the wrong shape
    #[error("{0}")]
    Validation(String),

    /// The requested tool is not in the catalogue
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The GitHub API answered with a non-success status
    #[error("{status} {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by GitHub, or the canonical reason phrase
        message: String,
    },

    /// The HTTP request could not be completed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content could not be decoded from its transport encoding
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GitHubMcpError {
    /// Build a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Build an upstream API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True when the error was detected locally, before any network call
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownTool(_))
    }
}

/// Result type alias for GitHub MCP operations
pub type Result<T> = std::result::Result<T, GitHubMcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_status_then_message() {
        let error = GitHubMcpError::api(404, "Not Found");
        assert_eq!(error.to_string(), "404 Not Found");
    }

    #[test]
    fn test_unknown_tool_display() {
        let error = GitHubMcpError::UnknownTool("frobnicate".to_string());
        assert_eq!(error.to_string(), "Unknown tool: frobnicate");
        assert!(error.is_local());
    }

    #[test]
    fn test_validation_display_is_verbatim() {
        let error = GitHubMcpError::validation("owner and repo are required");
        assert_eq!(error.to_string(), "owner and repo are required");
        assert!(error.is_local());
        assert!(!GitHubMcpError::api(500, "boom").is_local());
    }
}
