use serde::{Deserialize, Serialize};

/// Errors raised while building or reading a package archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PackagingError {
    /// Writing an entry or finishing the archive failed.
    #[error("archive serialization failed: {0}")]
    Serialization(String),

    /// The archive bytes could not be read back.
    #[error("archive is unreadable: {0}")]
    Corrupt(String),

    /// Two entries share a file name.
    #[error("duplicate entry name: {0}")]
    DuplicateEntry(String),
}
