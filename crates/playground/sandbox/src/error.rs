use playground_engine::EngineError;
use serde::{Deserialize, Serialize};

/// A fault raised while instantiating or running a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RuntimeError {
    /// Linking failed or the start function trapped.
    #[error("{0}")]
    Instantiation(String),

    /// The entry point trapped.
    #[error("{0}")]
    Trap(String),

    /// The entry point returned something that is not a numeric value.
    #[error("unsupported result: {0}")]
    UnsupportedResult(String),
}

impl From<EngineError> for RuntimeError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Instantiation(msg) => Self::Instantiation(msg),
            EngineError::Trap(msg) => Self::Trap(msg),
            EngineError::UnsupportedSignature(msg) => Self::UnsupportedResult(msg),
            other => Self::Trap(other.to_string()),
        }
    }
}
