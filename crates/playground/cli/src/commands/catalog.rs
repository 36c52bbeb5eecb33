//! examples / show commands

use playground_catalog::{ExampleCatalog, UnknownExample};

use crate::error::CliResult;
use crate::output::{self, OutputFormat};

/// List the built-in examples
pub fn list(format: OutputFormat) -> CliResult<()> {
    let examples = ExampleCatalog::all();
    match format {
        OutputFormat::Json => output::print_json(&examples),
        OutputFormat::Text => {
            for example in examples {
                println!(
                    "{:<10} {:<10} main = {:<4} {}",
                    example.key.as_str(),
                    example.title,
                    example.expected_main,
                    example.description
                );
            }
            Ok(())
        }
    }
}

/// Print the source of one example
pub fn show(key: &str, format: OutputFormat) -> CliResult<()> {
    let example = ExampleCatalog::get(key).ok_or_else(|| UnknownExample(key.to_string()))?;
    match format {
        OutputFormat::Json => output::print_json(example),
        OutputFormat::Text => {
            output::print_header(&format!("{} ({})", example.title, example.key));
            println!("{}", example.source);
            Ok(())
        }
    }
}
