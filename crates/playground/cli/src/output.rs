//! Output formatting utilities

use colored::*;
use playground_types::{LogEntry, LogKind};
use serde::Serialize;

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored log lines
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

/// Print captured log entries, one per line, marked by kind
pub fn print_logs(entries: &[LogEntry]) {
    for entry in entries {
        let marker = match entry.kind {
            LogKind::Info => "ℹ".blue(),
            LogKind::Success => "✓".green(),
            LogKind::Error => "✗".red(),
        };
        println!("{} {}", marker, entry.message);
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a bold section header
pub fn print_header(title: &str) {
    println!("{}", title.bold());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Report a failure that never reached the command's own output
pub fn print_failure(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Json => println!("{:#}", serde_json::json!({ "error": message })),
        OutputFormat::Text => print_error(message),
    }
}
