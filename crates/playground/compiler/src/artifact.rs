use std::sync::Arc;

use playground_types::ContentHash;

/// The output of one successful compile.
///
/// The module handle and binary always come from the same compile call.
/// Artifacts are never mutated; a later compile supersedes them.
#[derive(Clone, Debug)]
pub struct CompiledArtifact<M> {
    module: M,
    binary: Arc<[u8]>,
    source: Arc<str>,
    hash: ContentHash,
}

impl<M> CompiledArtifact<M> {
    pub(crate) fn new(module: M, binary: Vec<u8>, source: &str) -> Self {
        let hash = ContentHash::hash(&binary);
        Self {
            module,
            binary: binary.into(),
            source: source.into(),
            hash,
        }
    }

    /// Executable module handle.
    pub fn module(&self) -> &M {
        &self.module
    }

    /// Encoded `.wasm` bytes.
    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    /// Source text this artifact was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// BLAKE3 digest of [`binary`](Self::binary).
    pub fn hash(&self) -> ContentHash {
        self.hash
    }

    pub fn verify_hash(&self) -> bool {
        ContentHash::hash(&self.binary) == self.hash
    }
}
