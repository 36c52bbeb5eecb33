use playground_diagnostics::SharedSink;
use playground_types::NumericValue;

use crate::error::EngineError;
use crate::imports::ImportTable;

/// A conformant WebAssembly execution backend.
///
/// Modules are immutable handles that can be shared across threads and
/// instantiated any number of times. Instances own all guest state and are
/// dropped by the caller when it is done with them.
pub trait ExecutionEngine: Send + Sync + 'static {
    type Module: Clone + Send + Sync + 'static;
    type Instance;

    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Turn a validated binary into an executable module handle.
    fn load(&self, binary: &[u8]) -> Result<Self::Module, EngineError>;

    /// Link `module` against `imports` and run its start function, if any.
    ///
    /// Host functions write diagnostics to `sink`.
    fn instantiate(
        &self,
        module: &Self::Module,
        imports: &ImportTable,
        sink: SharedSink,
    ) -> Result<Self::Instance, EngineError>;

    /// Whether `instance` exports a function `name` that takes no arguments.
    fn has_entry_point(&self, instance: &mut Self::Instance, name: &str) -> bool;

    /// Call the zero-argument export `name` and return its results.
    fn invoke(
        &self,
        instance: &mut Self::Instance,
        name: &str,
    ) -> Result<Vec<NumericValue>, EngineError>;
}
