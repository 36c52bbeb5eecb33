use std::future::Future;
use std::sync::Arc;

use playground_catalog::ExampleKey;
use playground_compiler::{CompiledArtifact, CompilerAdapter};
use playground_diagnostics::{DiagnosticSink, InterceptorGuard, LogBook, LogInterceptor};
use playground_engine::{ExecutionEngine, ImportTable, WasmtimeEngine};
use playground_packager::{ArtifactPackager, PackageArchive};
use playground_sandbox::ExecutionSandbox;
use playground_types::{ExecutionResult, LogEntry};

use crate::config::PipelineConfig;
use crate::error::{ErrorKind, PipelineError};
use crate::state::PipelineState;

/// Compile → run → package orchestrator.
///
/// Operations take `&mut self`, so one pipeline handles one call at a time.
/// Share it behind a `tokio::sync::Mutex` when several tasks need it.
pub struct Pipeline<E: ExecutionEngine = WasmtimeEngine> {
    config: PipelineConfig,
    adapter: CompilerAdapter<E>,
    sandbox: Arc<ExecutionSandbox<E>>,
    packager: Arc<ArtifactPackager>,
    book: LogBook,
    state: PipelineState,
    artifact: Option<CompiledArtifact<E::Module>>,
    last_result: Option<ExecutionResult>,
    output: String,
}

impl Pipeline {
    /// Pipeline on a wasmtime engine configured from `config`.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let engine = WasmtimeEngine::new(config.engine_config())?;
        Ok(Self::with_engine(Arc::new(engine), config))
    }
}

impl<E: ExecutionEngine> Pipeline<E> {
    pub fn with_engine(engine: Arc<E>, config: PipelineConfig) -> Self {
        let book = LogBook::new();
        let sandbox = ExecutionSandbox::new(Arc::clone(&engine), Arc::new(book.clone()))
            .with_entry_point(config.entry_point.clone());
        let packager = ArtifactPackager::new(config.layout.clone(), config.entry_point.clone());
        Self {
            adapter: CompilerAdapter::new(engine),
            sandbox: Arc::new(sandbox),
            packager: Arc::new(packager),
            book,
            state: PipelineState::Idle,
            artifact: None,
            last_result: None,
            output: String::new(),
            config,
        }
    }

    /// Compile `source` and make it the current artifact.
    ///
    /// On success the log is cleared before the success entry is written.
    /// On failure the previous artifact, state and log are kept and one
    /// error entry is appended.
    pub async fn compile(
        &mut self,
        source: &str,
    ) -> Result<CompiledArtifact<E::Module>, PipelineError> {
        tracing::debug!("Compiling WebAssembly Text Format (WAT) to WASM...");

        let adapter = self.adapter.clone();
        let source = source.to_string();
        let work = offload(move || adapter.compile(&source));
        let outcome = while_busy(&mut self.state, PipelineState::Compiling, work)
            .await
            .map_err(|e| PipelineError::TaskFailed(ErrorKind::Compile, e.to_string()))
            .and_then(|r| r.map_err(PipelineError::from));

        match outcome {
            Ok(artifact) => {
                self.book.clear();
                self.output.clear();
                self.last_result = None;
                self.artifact = Some(artifact.clone());
                self.state = PipelineState::Compiled;
                self.book.success("Successfully compiled WAT to WASM!");
                Ok(artifact)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Run the current artifact against the default imports.
    pub async fn run(&mut self) -> Result<ExecutionResult, PipelineError> {
        self.run_with_imports(None).await
    }

    /// Run the current artifact; `imports` override the defaults per function.
    pub async fn run_with_imports(
        &mut self,
        imports: Option<ImportTable>,
    ) -> Result<ExecutionResult, PipelineError> {
        let artifact = match &self.artifact {
            Some(artifact) => artifact.clone(),
            None => return Err(self.fail(PipelineError::NoArtifact)),
        };
        self.book.info("Running WebAssembly module...");

        let sandbox = Arc::clone(&self.sandbox);
        let work = offload(move || sandbox.run(artifact.module(), imports.as_ref()));
        let outcome = while_busy(&mut self.state, PipelineState::Running, work)
            .await
            .map_err(|e| PipelineError::TaskFailed(ErrorKind::Runtime, e.to_string()))
            .and_then(|r| r.map_err(PipelineError::from));

        match outcome {
            Ok(result) => {
                self.output = result.format_output();
                self.last_result = Some(result.clone());
                self.state = PipelineState::Ran;
                self.book.success("WebAssembly execution completed!");
                Ok(result)
            }
            Err(err) => {
                self.output.clear();
                self.last_result = None;
                self.state = PipelineState::RunFailed;
                Err(self.fail(err))
            }
        }
    }

    /// Compile `source`, then run it if the compile succeeded.
    pub async fn compile_and_run(
        &mut self,
        source: &str,
    ) -> Result<ExecutionResult, PipelineError> {
        self.compile(source).await?;
        self.run().await
    }

    /// Bundle the current artifact into an archive. Never changes state.
    pub async fn package(&self) -> Result<PackageArchive, PipelineError> {
        let artifact = match &self.artifact {
            Some(artifact) => artifact.clone(),
            None => return Err(self.fail(PipelineError::NoArtifact)),
        };

        let packager = Arc::clone(&self.packager);
        let outcome = offload(move || packager.package(artifact.binary(), artifact.source()))
            .await
            .map_err(|e| PipelineError::TaskFailed(ErrorKind::Packaging, e.to_string()))
            .and_then(|r| r.map_err(PipelineError::from));

        match outcome {
            Ok(archive) => {
                self.book.success("Successfully created the WASM package!");
                Ok(archive)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Source text of a catalog example, noting the load in the log.
    pub fn load_example(&self, key: ExampleKey) -> &'static str {
        self.book.info(&format!("Loaded {key} example"));
        key.source()
    }

    /// Drop all log entries and the formatted output.
    pub fn clear_logs(&mut self) {
        self.book.clear();
        self.output.clear();
    }

    /// Capture foreign `tracing` events on this thread into the log while
    /// the guard is alive.
    pub fn intercept(&self) -> InterceptorGuard {
        LogInterceptor::acquire(&self.book)
    }

    pub fn logs(&self) -> Vec<LogEntry> {
        self.book.entries()
    }

    pub fn logbook(&self) -> &LogBook {
        &self.book
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn artifact(&self) -> Option<&CompiledArtifact<E::Module>> {
        self.artifact.as_ref()
    }

    pub fn last_result(&self) -> Option<&ExecutionResult> {
        self.last_result.as_ref()
    }

    /// `key: value` lines of the last result, `No results returned` when it
    /// was empty, or an empty string before any successful run.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn fail(&self, err: PipelineError) -> PipelineError {
        self.book.error(&err.to_string());
        err
    }
}

/// Puts the previous state back when dropped.
struct RestoreState<'a> {
    state: &'a mut PipelineState,
    previous: PipelineState,
}

impl Drop for RestoreState<'_> {
    fn drop(&mut self) {
        *self.state = self.previous;
    }
}

/// Hold `busy` while `work` is pending. The previous state returns when the
/// work completes or the future is dropped; callers set the outcome state.
async fn while_busy<T>(
    state: &mut PipelineState,
    busy: PipelineState,
    work: impl Future<Output = T>,
) -> T {
    let previous = std::mem::replace(state, busy);
    let _restore = RestoreState { state, previous };
    work.await
}

/// Run `work` on the blocking pool under the caller's tracing dispatcher.
async fn offload<T, F>(work: F) -> Result<T, tokio::task::JoinError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let dispatch = tracing::dispatcher::get_default(|d| d.clone());
    tokio::task::spawn_blocking(move || tracing::dispatcher::with_default(&dispatch, work)).await
}
