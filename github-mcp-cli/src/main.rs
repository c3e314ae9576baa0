use std::process;

use colored::*;
use github_mcp::mcp::responses::response_text;
use github_mcp::{GitHubConfig, McpServer};
use github_mcp_cli::cli::{Cli, Commands};
use github_mcp_cli::exit_codes::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use github_mcp_cli::{logging, tools};
use is_terminal::IsTerminal;
use serde_json::{Map, Value};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // With no subcommand an MCP client on stdio still gets a server
    let is_mcp_mode = matches!(cli.command, Some(Commands::Serve) | None)
        && !std::io::stdin().is_terminal();

    if cli.command.is_none() && !is_mcp_mode {
        process::exit(Cli::write_help_to(&mut std::io::stdout()));
    }

    let log_level = logging::level_for(cli.quiet, cli.debug, cli.verbose);
    if let Err(e) = logging::init_logging(log_level) {
        eprintln!("{e:#}");
        process::exit(EXIT_USAGE);
    }

    let exit_code = match cli.command {
        Some(Commands::Tools { format, verbose }) => match tools::run_tools_command(format, verbose)
        {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                tracing::error!("Failed to list tools: {e}");
                EXIT_FAILURE
            }
        },
        Some(Commands::Call { tool, args }) => match load_config(cli.api_url.as_deref()) {
            Ok(config) => run_call(&config, &tool, &args).await,
            Err(code) => code,
        },
        Some(Commands::Serve) | None => match load_config(cli.api_url.as_deref()) {
            Ok(config) => {
                tracing::info!("Starting MCP server against {}", config.api_url);
                run_server(&config).await
            }
            Err(code) => code,
        },
    };

    process::exit(exit_code);
}

fn load_config(api_url: Option<&str>) -> Result<GitHubConfig, i32> {
    let config = GitHubConfig::from_env().and_then(|config| match api_url {
        Some(url) => config.with_api_url(url),
        None => Ok(config),
    });

    config.map_err(|e| {
        tracing::error!("{e}");
        eprintln!("{e}");
        EXIT_USAGE
    })
}

async fn run_server(config: &GitHubConfig) -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let server = match McpServer::from_config(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {e}");
            return EXIT_FAILURE;
        }
    };

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    let running = match serve_server(server, stdio()).await {
        Ok(running) => running,
        Err(e) => {
            tracing::error!("MCP server error: {e}");
            return EXIT_FAILURE;
        }
    };
    tracing::info!("MCP server started successfully");

    tokio::select! {
        quit = running.waiting() => match quit {
            Ok(reason) => {
                tracing::info!("MCP session ended: {reason:?}");
                EXIT_SUCCESS
            }
            Err(e) => {
                tracing::error!("MCP session failed: {e}");
                EXIT_FAILURE
            }
        },
        _ = ct.cancelled() => {
            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
    }
}

async fn run_call(config: &GitHubConfig, tool: &str, args: &str) -> i32 {
    let arguments = match serde_json::from_str::<Value>(args) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        Ok(_) => {
            eprintln!("--args must be a JSON object");
            return EXIT_USAGE;
        }
        Err(e) => {
            eprintln!("Invalid --args JSON: {e}");
            return EXIT_USAGE;
        }
    };

    let server = match McpServer::from_config(config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {e}");
            return EXIT_FAILURE;
        }
    };

    tracing::debug!("Calling {tool}");
    let result = server.call(tool, arguments).await;
    let text = response_text(&result).unwrap_or_default();

    if result.is_error.unwrap_or(false) {
        if Cli::should_color_errors() {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{text}");
        }
        EXIT_FAILURE
    } else {
        println!("{text}");
        EXIT_SUCCESS
    }
}
