//! Formatting helpers shared by the tool implementations

use crate::error::{GitHubMcpError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};

/// Placeholder for absent values
pub const NOT_AVAILABLE: &str = "N/A";

/// One line per item, or `sentinel` when there are none
pub fn format_list<T>(items: &[T], sentinel: &str, line: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return sentinel.to_string();
    }
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

/// Render `Key: value` lines
pub fn key_value_summary(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append a free-text body below a summary, separated by a blank line
pub fn with_body(summary: String, body: Option<&str>) -> String {
    match body.map(str::trim) {
        Some(body) if !body.is_empty() => format!("{summary}\n\n{body}"),
        _ => summary,
    }
}

/// First line of a possibly multi-line text
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// The value, or `N/A` when absent or empty
pub fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// Abbreviated commit SHA
pub fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

/// `yes` or `no`
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Timestamp in RFC 3339 with second precision
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Unix seconds in RFC 3339, or the raw number when out of range
pub fn format_unix_timestamp(seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .map(|timestamp| format_timestamp(&timestamp))
        .unwrap_or_else(|| seconds.to_string())
}

/// Decode base64 content as served by the contents API
///
/// GitHub wraps the encoded payload at 60 columns, so whitespace is dropped
/// before decoding.
pub fn decode_base64(content: &str) -> Result<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| GitHubMcpError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| GitHubMcpError::Decode("content is not valid UTF-8".into()))
}

/// Encode text for upload through the contents API
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Split a comma-separated list, dropping blanks
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_sentinel() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(format_list(&empty, "No things found", |n| n.to_string()), "No things found");
        assert_eq!(format_list(&[1, 2], "No things found", |n| n.to_string()), "1\n2");
    }

    #[test]
    fn test_decode_base64_with_line_breaks() {
        assert_eq!(decode_base64("aGVs\nbG8g\nd29y\nbGQ=\n").unwrap(), "hello world");
    }

    #[test]
    fn test_decode_base64_rejects_garbage() {
        let error = decode_base64("!!!").unwrap_err();
        assert!(matches!(error, GitHubMcpError::Decode(_)));
    }

    #[test]
    fn test_encode_base64() {
        assert_eq!(encode_base64("hello world"), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(short_sha("0123456789abcdef"), "0123456");
        assert_eq!(short_sha("abc"), "abc");
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("x")), "x");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(split_csv("push, pull_request,,"), vec!["push", "pull_request"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn test_format_unix_timestamp() {
        assert_eq!(format_unix_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_unix_timestamp(1_700_000_000), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_with_body() {
        assert_eq!(with_body("a".into(), Some("  ")), "a");
        assert_eq!(with_body("a".into(), Some("b\n")), "a\n\nb");
    }
}
