//! Exit code constants for CLI commands
//!
//! These constants define the standard exit codes used throughout the application:
//! - 0: Success
//! - 1: A tool reported an error, or the MCP session could not be established
//! - 2: Usage or configuration errors

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Tool error or MCP session failure
pub const EXIT_FAILURE: i32 = 1;

/// Invalid arguments or configuration
pub const EXIT_USAGE: i32 = 2;
