use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io::{self, Write};

use crate::exit_codes::{EXIT_FAILURE, EXIT_SUCCESS};

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "github-mcp")]
#[command(version)]
#[command(about = "An MCP server exposing GitHub operations as tools")]
#[command(long_about = "
github-mcp is an MCP (Model Context Protocol) server that exposes GitHub
repositories, issues, pull requests, releases, webhooks, notifications and
more as tools. Each tool call becomes one GitHub REST API request.

Authentication uses the GITHUB_TOKEN environment variable. GITHUB_API_URL
points the server at GitHub Enterprise.

Example usage:
  github-mcp serve                 # Run as MCP server
  github-mcp tools                 # Show the tool catalogue
  github-mcp call list_issues --args '{\"owner\":\"rust-lang\",\"repo\":\"rust\"}'
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// GitHub API base URL (overrides GITHUB_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs github-mcp as an MCP server on stdin/stdout. This is the default mode
when invoked via stdio by an MCP client. Logs go to stderr, or to the file
named by GITHUB_MCP_LOG_FILE.

Example:
  GITHUB_TOKEN=ghp_... github-mcp serve
")]
    Serve,
    /// List the available tools
    #[command(long_about = "
Lists every tool with its description and parameters. Required parameters
are marked with '*'.

Output formats:
  table  - Formatted table (default)
  json   - The exact tool definitions advertised over MCP

Examples:
  github-mcp tools
  github-mcp tools --format json
  github-mcp tools --verbose        # Show full descriptions
")]
    Tools {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Show full descriptions
        #[arg(short, long)]
        verbose: bool,
    },
    /// Call a single tool and print its result
    #[command(long_about = "
Runs one tool exactly as an MCP client would and prints the text result.
Exits with 1 when the tool reports an error.

Examples:
  github-mcp call get_authenticated_user
  github-mcp call create_issue --args '{\"owner\":\"me\",\"repo\":\"demo\",\"title\":\"Bug\"}'
")]
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// Write the top-level help, returning the process exit code
    pub fn write_help_to<W: Write>(out: &mut W) -> i32 {
        match Self::command().write_help(out) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Failed to print help: {e}");
                EXIT_FAILURE
            }
        }
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && color_allowed()
    }

    /// Color for messages written to stderr
    pub fn should_color_errors() -> bool {
        io::stderr().is_terminal() && color_allowed()
    }
}

fn color_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
