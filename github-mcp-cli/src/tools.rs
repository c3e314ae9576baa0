use anyhow::Result;
use colored::*;
use github_mcp::{McpTool, ToolRegistry};
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Style},
    Table, Tabled,
};

use crate::cli::{Cli, OutputFormat};

const DESCRIPTION_WIDTH: usize = 60;

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Parameters")]
    parameters: String,
}

pub fn run_tools_command(format: OutputFormat, verbose: bool) -> Result<()> {
    let registry = ToolRegistry::with_all_tools();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&registry.list_tools())?;
            println!("{json}");
        }
        OutputFormat::Table => {
            display_table(&registry, verbose);
        }
    }

    Ok(())
}

/// Truncate to `width` characters, ending with "..." when shortened
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// `owner*, repo*, state`
fn parameter_summary(tool: &dyn McpTool) -> String {
    tool.parameters()
        .iter()
        .map(|param| {
            if param.required {
                format!("{}*", param.name)
            } else {
                param.name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_rows(registry: &ToolRegistry, verbose: bool) -> Vec<ToolRow> {
    registry
        .iter()
        .map(|tool| {
            let description = if verbose {
                tool.description().to_string()
            } else {
                truncate(tool.description(), DESCRIPTION_WIDTH)
            };

            let parameters = if verbose {
                parameter_summary(tool)
            } else {
                format!("{}", tool.parameters().len())
            };

            ToolRow {
                name: tool.name().to_string(),
                description,
                parameters,
            }
        })
        .collect()
}

fn display_table(registry: &ToolRegistry, verbose: bool) {
    if registry.is_empty() {
        println!("No tools registered.");
        return;
    }

    let is_tty = Cli::is_tty();

    let mut table = Table::new(build_rows(registry, verbose));
    table.with(Style::modern());

    if Cli::should_use_color() {
        table.with(Modify::new(Rows::one(0)).with(Color::FG_BRIGHT_CYAN));
    }

    table.with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    println!("{table}");

    if is_tty {
        println!();
        println!("{} tools available", registry.len().to_string().bright_white());
        if verbose {
            println!("  {} Required parameter", "*".red());
        } else {
            println!("  Use {} to see parameter names", "--verbose".cyan());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("List issues", 60), "List issues");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 6), "ééé...");
    }

    #[test]
    fn test_verbose_rows_mark_required_parameters() {
        let registry = ToolRegistry::with_all_tools();
        let rows = build_rows(&registry, true);
        let row = rows.iter().find(|row| row.name == "list_issues").unwrap();
        assert!(row.parameters.starts_with("owner*, repo*"));
        assert!(row.parameters.contains("state"));
        assert!(!row.parameters.contains("state*"));
    }

    #[test]
    fn test_compact_rows_show_parameter_count() {
        let registry = ToolRegistry::with_all_tools();
        let rows = build_rows(&registry, false);
        let row = rows
            .iter()
            .find(|row| row.name == "get_authenticated_user")
            .unwrap();
        assert_eq!(row.parameters, "0");
        assert!(rows
            .iter()
            .all(|row| row.description.chars().count() <= DESCRIPTION_WIDTH));
    }

    #[test]
    fn test_tools_command_runs() {
        assert!(run_tools_command(OutputFormat::Table, false).is_ok());
        assert!(run_tools_command(OutputFormat::Json, true).is_ok());
    }
}
