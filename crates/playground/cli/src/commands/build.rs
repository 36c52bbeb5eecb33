//! compile / run / package commands

use std::path::{Path, PathBuf};

use clap::Args;
use playground_catalog::ExampleKey;
use playground_pipeline::{ErrorReport, Pipeline, PipelineConfig, PipelineError};
use playground_types::{ExecutionResult, LogEntry};
use serde::Serialize;

use crate::error::{CliError, CliResult};
use crate::output::{self, print_logs, OutputFormat};

/// Where the source text comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Path to a .wat file
    #[arg(required_unless_present = "example", conflicts_with = "example")]
    pub file: Option<PathBuf>,

    /// Use a built-in example instead of a file
    #[arg(short, long)]
    pub example: Option<ExampleKey>,
}

/// JSON document printed with `--output json`
#[derive(Debug, Default, Serialize)]
struct Report {
    logs: Vec<LogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact: Option<ArtifactSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ExecutionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    archive: Option<ArchiveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ArtifactSummary {
    hash: String,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ArchiveSummary {
    path: PathBuf,
    hash: String,
    entries: Vec<String>,
}

/// Compile a module, optionally writing the binary
pub async fn compile(
    source: SourceArgs,
    out: Option<PathBuf>,
    config: PipelineConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let mut pipeline = Pipeline::new(config).map_err(CliError::Setup)?;
    let text = read_source(&pipeline, &source)?;
    let mut report = Report::default();

    let outcome = match pipeline.compile(&text).await {
        Ok(artifact) => {
            if let Some(path) = &out {
                std::fs::write(path, artifact.binary())?;
                tracing::debug!(path = %path.display(), "binary written");
            }
            report.artifact = Some(ArtifactSummary {
                hash: artifact.hash().to_hex(),
                size: artifact.binary().len(),
                path: out,
            });
            Ok(())
        }
        Err(err) => Err(err),
    };
    finish(&pipeline, report, outcome, format)
}

/// Compile and run a module
pub async fn run(source: SourceArgs, config: PipelineConfig, format: OutputFormat) -> CliResult<()> {
    let mut pipeline = Pipeline::new(config).map_err(CliError::Setup)?;
    let text = read_source(&pipeline, &source)?;
    let mut report = Report::default();

    let outcome = {
        let _capture = pipeline.intercept();
        pipeline.compile_and_run(&text).await
    };
    let outcome = outcome.map(|result| {
        report.result = Some(result);
    });

    if format == OutputFormat::Text && outcome.is_ok() {
        print_logs(&pipeline.logs());
        output::print_header("Output");
        println!("{}", pipeline.output());
        return Ok(());
    }
    finish(&pipeline, report, outcome, format)
}

/// Compile a module and write a distributable archive
pub async fn package(
    source: SourceArgs,
    out: Option<PathBuf>,
    config: PipelineConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let path = archive_path(out, &config.archive_name);
    let mut pipeline = Pipeline::new(config).map_err(CliError::Setup)?;
    let text = read_source(&pipeline, &source)?;
    let mut report = Report::default();

    let outcome = match pipeline.compile(&text).await {
        Ok(_) => pipeline.package().await,
        Err(err) => Err(err),
    };
    let outcome = match outcome {
        Ok(archive) => {
            std::fs::write(&path, archive.bytes())?;
            report.archive = Some(ArchiveSummary {
                hash: archive.hash().to_hex(),
                entries: archive.names().into_iter().map(String::from).collect(),
                path,
            });
            Ok(())
        }
        Err(err) => Err(err),
    };
    finish(&pipeline, report, outcome, format)
}

/// Print the log (and the report in JSON mode) and turn the pipeline outcome
/// into the command result.
fn finish(
    pipeline: &Pipeline,
    mut report: Report,
    outcome: Result<(), PipelineError>,
    format: OutputFormat,
) -> CliResult<()> {
    report.logs = pipeline.logs();
    if let Err(err) = &outcome {
        report.error = Some(err.report());
    }
    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => {
            print_logs(&report.logs);
            if let Some(artifact) = &report.artifact {
                println!("hash: {}", artifact.hash);
                println!("size: {} bytes", artifact.size);
                if let Some(path) = &artifact.path {
                    println!("written to {}", path.display());
                }
            }
            if let Some(archive) = &report.archive {
                println!("archive: {}", archive.path.display());
                println!("hash: {}", archive.hash);
                for name in &archive.entries {
                    println!("  {name}");
                }
            }
        }
    }
    outcome.map_err(Into::into)
}

fn read_source(pipeline: &Pipeline, source: &SourceArgs) -> CliResult<String> {
    match (&source.file, source.example) {
        (_, Some(key)) => Ok(pipeline.load_example(key).to_string()),
        (Some(path), None) => Ok(std::fs::read_to_string(path)?),
        // clap enforces that one of the two is present
        (None, None) => Ok(String::new()),
    }
}

/// `out` if it names a file, `out/<archive_name>` if it is a directory, or
/// `<archive_name>` in the working directory when absent.
fn archive_path(out: Option<PathBuf>, archive_name: &str) -> PathBuf {
    match out {
        Some(dir) if dir.is_dir() => dir.join(archive_name),
        Some(path) => path,
        None => Path::new(archive_name).to_path_buf(),
    }
}
