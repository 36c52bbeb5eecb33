//! wasm-playground - WebAssembly Text Format playground on the command line
//!
//! Compiles WAT to wasm, runs it in a sandbox with the playground's `env`
//! host imports, and packages modules with a browser runner.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use playground_diagnostics::DIAGNOSTIC_TARGET;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

mod commands;
mod config;
mod error;
mod output;

use commands::{build, catalog};
use config::CliConfig;
use error::CliResult;
use output::OutputFormat;

/// wasm-playground CLI
#[derive(Parser)]
#[command(name = "wasm-playground")]
#[command(about = "Compile, run and package WebAssembly Text Format modules", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "WASM_PLAYGROUND_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,

    /// Fuel per run; 0 disables metering
    #[arg(long, env = "WASM_PLAYGROUND_FUEL", global = true)]
    fuel: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Compile a module and report its hash
    Compile {
        #[command(flatten)]
        source: build::SourceArgs,

        /// Write the .wasm binary here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Compile and run a module
    Run {
        #[command(flatten)]
        source: build::SourceArgs,
    },

    /// Compile a module and write a .tar.gz with a browser runner
    Package {
        #[command(flatten)]
        source: build::SourceArgs,

        /// Archive file, or a directory to place it in
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the built-in examples
    Examples,

    /// Print the source of a built-in example
    Show {
        /// Example key
        key: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with(
            // Diagnostic entries are printed from the log book itself.
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr)
                .with_filter(filter::filter_fn(|meta| meta.target() != DIAGNOSTIC_TARGET)),
        )
        .init();

    let format = cli.output;
    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_reported() {
                output::print_failure(format, &e.to_string());
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?.pipeline;
    if let Some(fuel) = cli.fuel {
        config.fuel_limit = (fuel > 0).then_some(fuel);
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Compile { source, out } => build::compile(source, out, config, cli.output).await,
        Commands::Run { source } => build::run(source, config, cli.output).await,
        Commands::Package { source, out } => build::package(source, out, config, cli.output).await,
        Commands::Examples => catalog::list(cli.output),
        Commands::Show { key } => catalog::show(&key, cli.output),
    }
}
