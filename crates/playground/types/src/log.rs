use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity class of a captured diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Error,
    Success,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// One line of the pipeline's diagnostic log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
}

impl LogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogKind::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogKind::Success, message)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(LogEntry::info("a").kind, LogKind::Info);
        assert_eq!(LogEntry::error("b").kind, LogKind::Error);
        assert_eq!(LogEntry::success("c").kind, LogKind::Success);
    }

    #[test]
    fn display_includes_kind() {
        let e = LogEntry::error("boom");
        assert_eq!(e.to_string(), "[error] boom");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&LogEntry::success("done")).unwrap();
        assert_eq!(json, r#"{"kind":"success","message":"done"}"#);
    }
}
