//! Response creation utilities for MCP operations

use rmcp::model::*;

/// Create a success response for MCP tool calls
pub fn create_success_response(message: impl Into<String>) -> CallToolResult {
    text_response(message.into(), false)
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: impl Into<String>) -> CallToolResult {
    text_response(message.into(), true)
}

fn text_response(text: String, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(RawContent::Text(RawTextContent { text }), None)],
        is_error: Some(is_error),
    }
}

/// The text of the first content block, if it is text
pub fn response_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let result = create_success_response("done");
        assert_eq!(result.is_error, Some(false));
        assert_eq!(response_text(&result), Some("done"));
    }

    #[test]
    fn test_error_response() {
        let result = create_error_response(String::from("Error: boom"));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), Some("Error: boom"));
    }
}
