use playground_compiler::CompileError;
use playground_engine::EngineError;
use playground_packager::PackagingError;
use playground_sandbox::RuntimeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure category reported to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Compile,
    Runtime,
    Packaging,
    NoArtifact,
}

impl ErrorKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Compile => "Compilation error: ",
            Self::Runtime => "Runtime error: ",
            Self::Packaging => "Failed to create download package: ",
            Self::NoArtifact => "",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Compile => "compile",
            Self::Runtime => "runtime",
            Self::Packaging => "packaging",
            Self::NoArtifact => "no_artifact",
        };
        f.write_str(s)
    }
}

/// Errors returned by [`Pipeline`](crate::Pipeline) operations.
///
/// The `Display` output is the message written to the pipeline log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("Compilation error: {0}")]
    Compile(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("Failed to create download package: {0}")]
    Packaging(#[from] PackagingError),

    #[error("No compiled WASM module available. Please compile first.")]
    NoArtifact,

    /// The engine could not be set up.
    #[error("Runtime error: {0}")]
    Engine(#[from] EngineError),

    /// A blocking task panicked or was cancelled.
    #[error("{}{}", .0.prefix(), .1)]
    TaskFailed(ErrorKind, String),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Compile(_) => ErrorKind::Compile,
            Self::Runtime(_) | Self::Engine(_) => ErrorKind::Runtime,
            Self::Packaging(_) => ErrorKind::Packaging,
            Self::NoArtifact => ErrorKind::NoArtifact,
            Self::TaskFailed(kind, _) => *kind,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable summary of a [`PipelineError`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
