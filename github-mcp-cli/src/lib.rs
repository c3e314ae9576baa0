//! github-mcp CLI Library
//!
//! This library provides the core functionality for the github-mcp CLI,
//! including command-line interface definitions, logging setup, and exit codes.

// Re-export modules for use in tests
/// Command-line interface definitions and argument parsing
pub mod cli;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Log output setup for interactive and MCP modes
pub mod logging;
/// Catalogue listing for the `tools` command
pub mod tools;
