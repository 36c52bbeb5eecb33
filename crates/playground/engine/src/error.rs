use serde::{Deserialize, Serialize};

/// Errors raised by an execution engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EngineError {
    /// The engine itself could not be configured.
    #[error("engine configuration failed: {0}")]
    Configuration(String),

    /// The binary could not be turned into an executable module.
    #[error("module load failed: {0}")]
    Load(String),

    /// Linking or the start function failed.
    #[error("instantiation failed: {0}")]
    Instantiation(String),

    /// A trap was raised while running guest code.
    #[error("{0}")]
    Trap(String),

    /// The requested export does not exist or is not a function.
    #[error("export not found: {0}")]
    ExportNotFound(String),

    /// A function uses parameter or result types the host cannot represent.
    #[error("unsupported signature: {0}")]
    UnsupportedSignature(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let e = EngineError::Load("bad magic".into());
        assert_eq!(e.to_string(), "module load failed: bad magic");

        let e = EngineError::Trap("wasm trap: integer divide by zero".into());
        assert_eq!(e.to_string(), "wasm trap: integer divide by zero");

        let e = EngineError::ExportNotFound("main".into());
        assert!(e.to_string().contains("main"));
    }

    #[test]
    fn error_serde_roundtrip() {
        let e = EngineError::Instantiation("unknown import".into());
        let json = serde_json::to_string(&e).unwrap();
        let restored: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(e, restored);
    }
}
