#![deny(unsafe_code)]
//! # playground-engine
//!
//! The execution-engine capability consumed by the playground sandbox.
//!
//! [`ExecutionEngine`] abstracts `load` / `instantiate` / `invoke` so the
//! pipeline does not depend on one backend. Host functions are described by
//! an engine-neutral [`ImportTable`]; [`default_imports`] provides the `env`
//! namespace every playground module may import. [`WasmtimeEngine`] is the
//! bundled backend.

pub mod defaults;
pub mod engine;
pub mod error;
pub mod imports;
pub mod wasmtime_backend;

pub use defaults::{default_imports, log_message, ENV_NAMESPACE, LOG, LOG_STRING, MEMORY_EXPORT};
pub use engine::ExecutionEngine;
pub use error::EngineError;
pub use imports::{FunctionSignature, HostContext, HostFunction, HostMemory, HostTrap, ImportTable};
pub use wasmtime_backend::{EngineConfig, WasmtimeEngine, WasmtimeInstance};
