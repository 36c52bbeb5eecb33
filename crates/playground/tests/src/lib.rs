//! Shared fixtures for the playground end-to-end and property tests.

use std::sync::Arc;

use playground_compiler::CompilerAdapter;
use playground_diagnostics::LogBook;
use playground_engine::WasmtimeEngine;
use playground_pipeline::{Pipeline, PipelineConfig};
use playground_sandbox::ExecutionSandbox;

/// A pipeline with the default (sandboxed) configuration.
pub fn pipeline() -> Pipeline {
    Pipeline::new(PipelineConfig::default()).expect("wasmtime engine")
}

/// Module whose `main` returns `value`.
pub fn constant_module(value: i32) -> String {
    format!(r#"(module (func (export "main") (result i32) i32.const {value}))"#)
}

/// Compiler and sandbox sharing one engine, logging into `book`.
pub struct Harness {
    pub adapter: CompilerAdapter<WasmtimeEngine>,
    pub sandbox: ExecutionSandbox<WasmtimeEngine>,
    pub book: LogBook,
}

impl Harness {
    pub fn new() -> Self {
        let engine = Arc::new(WasmtimeEngine::with_defaults().expect("wasmtime engine"));
        let book = LogBook::new();
        Self {
            adapter: CompilerAdapter::new(Arc::clone(&engine)),
            sandbox: ExecutionSandbox::new(engine, Arc::new(book.clone())),
            book,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
