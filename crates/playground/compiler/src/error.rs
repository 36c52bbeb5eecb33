use serde::{Deserialize, Serialize};

/// Errors raised while turning source text into a compiled artifact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CompileError {
    /// The source contains nothing but whitespace.
    #[error("source text is empty")]
    EmptySource,

    /// The text could not be parsed.
    #[error("{0}")]
    Syntax(String),

    /// The binary parsed but is not a valid module.
    #[error("{0}")]
    Validation(String),

    /// The engine refused the validated binary.
    #[error("{0}")]
    Load(String),
}

impl CompileError {
    /// The underlying diagnostic, as reported by the compiler or engine.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::EmptySource => self.to_string(),
            Self::Syntax(msg) | Self::Validation(msg) | Self::Load(msg) => msg.clone(),
        }
    }
}
