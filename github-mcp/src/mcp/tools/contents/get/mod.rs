//! Tool for reading files and directories through the contents API
//!
//! Files come back base64 encoded and are decoded to text. Directories are
//! rendered one `<type> <path>` line per entry.

use crate::error::{GitHubMcpError, Result};
use crate::github::models::{ContentEntry, Contents};
use crate::mcp::shared_utils::{decode_base64, format_list};
use crate::mcp::tool_registry::{McpTool, ParamKind, ParamSpec, ToolArguments, ToolContext};
use crate::mcp::tools::{OWNER, REPO};
use async_trait::async_trait;

const PARAMETERS: &[ParamSpec] = &[
    OWNER,
    REPO,
    ParamSpec::required("path", ParamKind::String, "Path of the file or directory"),
    ParamSpec::optional("ref", ParamKind::String, "Branch, tag or commit to read from"),
];

/// Tool for fetching file or directory contents
#[derive(Default)]
pub struct GetFileContentsTool;

impl GetFileContentsTool {
    /// Creates a new instance of the GetFileContentsTool
    pub fn new() -> Self {
        Self
    }

    fn render_entry(entry: &ContentEntry) -> String {
        format!("{} {}", entry.kind, entry.path)
    }

    fn render_file(entry: &ContentEntry) -> Result<String> {
        match (entry.content.as_deref(), entry.encoding.as_deref()) {
            (Some(content), Some("base64") | None) => decode_base64(content),
            (Some(_), Some(encoding)) => Err(GitHubMcpError::Decode(format!(
                "unsupported encoding '{encoding}' for {}",
                entry.path
            ))),
            // Symlinks and submodules carry no inline content.
            (None, _) => Ok(Self::render_entry(entry)),
        }
    }
}

#[async_trait]
impl McpTool for GetFileContentsTool {
    fn name(&self) -> &'static str {
        "get_file_contents"
    }

    fn description(&self) -> &'static str {
        "Get the contents of a file, or the listing of a directory, in a repository"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        PARAMETERS
    }

    async fn execute(&self, arguments: ToolArguments, context: &ToolContext) -> Result<String> {
        let contents = context
            .github
            .get_contents(
                arguments.string("owner")?,
                arguments.string("repo")?,
                arguments.string("path")?,
                arguments.optional_string("ref"),
            )
            .await?;

        match contents {
            Contents::File(entry) => Self::render_file(&entry),
            Contents::Directory(entries) => Ok(format_list(
                &entries,
                "No contents found",
                Self::render_entry,
            )),
        }
    }
}
