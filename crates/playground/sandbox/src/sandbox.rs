use std::sync::Arc;

use playground_diagnostics::SharedSink;
use playground_engine::{default_imports, ExecutionEngine, ImportTable};
use playground_types::ExecutionResult;

use crate::error::RuntimeError;

/// Single-shot executor for compiled modules.
///
/// Every [`run`](Self::run) creates a new instance and drops it before
/// returning, so no guest state survives between runs.
pub struct ExecutionSandbox<E: ExecutionEngine> {
    engine: Arc<E>,
    sink: SharedSink,
    entry_point: String,
    defaults: ImportTable,
}

impl<E: ExecutionEngine> ExecutionSandbox<E> {
    /// Sandbox that invokes `main` and logs host calls to `sink`.
    pub fn new(engine: Arc<E>, sink: SharedSink) -> Self {
        Self {
            engine,
            sink,
            entry_point: ExecutionResult::MAIN.to_string(),
            defaults: default_imports(),
        }
    }

    /// Use a different zero-argument export as the entry point.
    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Instantiate `module` and call its entry point if it has one.
    ///
    /// `imports` override the defaults function by function. A module with
    /// no entry point yields an empty result.
    pub fn run(
        &self,
        module: &E::Module,
        imports: Option<&ImportTable>,
    ) -> Result<ExecutionResult, RuntimeError> {
        let merged = match imports {
            Some(overrides) => self.defaults.clone().merged_with(overrides),
            None => self.defaults.clone(),
        };

        let mut instance = self
            .engine
            .instantiate(module, &merged, Arc::clone(&self.sink))?;

        let mut result = ExecutionResult::default();
        if self.engine.has_entry_point(&mut instance, &self.entry_point) {
            let values = self.engine.invoke(&mut instance, &self.entry_point)?;
            if let Some(value) = values.into_iter().next() {
                result.insert(self.entry_point.clone(), value);
            }
        } else {
            tracing::debug!(entry_point = %self.entry_point, "no entry point exported");
        }
        Ok(result)
    }
}
