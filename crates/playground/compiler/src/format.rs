use wasmparser::Validator;

use crate::error::CompileError;

/// Translates source text into a validated binary module.
pub trait FormatCompiler: Send + Sync + 'static {
    fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError>;
}

/// WebAssembly Text Format compiler.
///
/// Parsing is done by `wat`; the output is then run through the full
/// `wasmparser` validator so that type errors surface at compile time rather
/// than at load time.
#[derive(Clone, Copy, Debug, Default)]
pub struct WatFormatCompiler;

impl FormatCompiler for WatFormatCompiler {
    fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError> {
        if source.trim().is_empty() {
            return Err(CompileError::EmptySource);
        }
        let binary = wat::parse_str(source).map_err(|e| CompileError::Syntax(e.to_string()))?;
        Validator::new()
            .validate_all(&binary)
            .map_err(|e| CompileError::Validation(e.to_string()))?;
        Ok(binary)
    }
}
