//! CLI error type

use playground_catalog::UnknownExample;
use playground_pipeline::PipelineError;
use thiserror::Error;

/// Errors surfaced by `wasm-playground`
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownExample(#[from] UnknownExample),

    /// The pipeline could not be built from the configuration.
    #[error("failed to start pipeline: {0}")]
    Setup(PipelineError),

    /// A pipeline operation failed. Its message is already in the printed log.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    /// Whether the failure has already been shown to the user as part of the
    /// command's log output.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Pipeline(_))
    }
}

/// Result alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use playground_engine::EngineError;

    #[test]
    fn only_logged_failures_count_as_reported() {
        let engine = PipelineError::from(EngineError::Configuration("bad stack".into()));
        let setup = CliError::Setup(engine.clone());
        assert!(!setup.is_reported());
        assert!(setup.to_string().starts_with("failed to start pipeline: "));
        assert!(CliError::Pipeline(engine).is_reported());
        assert!(!CliError::Config("x".into()).is_reported());
    }
}
