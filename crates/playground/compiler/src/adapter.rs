use std::sync::Arc;

use playground_engine::ExecutionEngine;

use crate::artifact::CompiledArtifact;
use crate::error::CompileError;
use crate::format::{FormatCompiler, WatFormatCompiler};

/// Turns source text into a [`CompiledArtifact`] for engine `E`.
///
/// The adapter is stateless: it never holds on to an artifact, so a failed
/// compile cannot disturb whatever the caller kept from a previous one.
pub struct CompilerAdapter<E: ExecutionEngine, C: FormatCompiler = WatFormatCompiler> {
    engine: Arc<E>,
    compiler: Arc<C>,
}

impl<E: ExecutionEngine> CompilerAdapter<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self::with_compiler(engine, WatFormatCompiler)
    }
}

impl<E: ExecutionEngine, C: FormatCompiler> CompilerAdapter<E, C> {
    pub fn with_compiler(engine: Arc<E>, compiler: C) -> Self {
        Self {
            engine,
            compiler: Arc::new(compiler),
        }
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Compile `source` and load the resulting binary.
    ///
    /// Identical source text always yields byte-identical binaries.
    pub fn compile(&self, source: &str) -> Result<CompiledArtifact<E::Module>, CompileError> {
        let binary = self.compiler.compile(source)?;
        let module = self
            .engine
            .load(&binary)
            .map_err(|e| CompileError::Load(e.to_string()))?;
        let artifact = CompiledArtifact::new(module, binary, source);
        tracing::debug!(
            engine = self.engine.name(),
            size = artifact.binary().len(),
            hash = %artifact.hash(),
            "module compiled"
        );
        Ok(artifact)
    }
}

impl<E: ExecutionEngine, C: FormatCompiler> Clone for CompilerAdapter<E, C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            compiler: Arc::clone(&self.compiler),
        }
    }
}
