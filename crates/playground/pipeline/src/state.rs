use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a pipeline is in its compile/run cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    /// No artifact has been compiled yet.
    #[default]
    Idle,
    Compiling,
    /// An artifact is available and has not been run since it was compiled.
    Compiled,
    Running,
    /// The last run succeeded.
    Ran,
    /// The last run trapped. The artifact is still available.
    RunFailed,
}

impl PipelineState {
    /// States in which an operation is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Compiling | Self::Running)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Compiling => "compiling",
            Self::Compiled => "compiled",
            Self::Running => "running",
            Self::Ran => "ran",
            Self::RunFailed => "run_failed",
        };
        f.write_str(s)
    }
}
