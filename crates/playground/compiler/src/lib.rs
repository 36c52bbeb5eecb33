#![deny(unsafe_code)]
//! # playground-compiler
//!
//! Compiler adapter for the WASM playground.
//!
//! A [`FormatCompiler`] translates source text into a validated binary;
//! [`CompilerAdapter`] pairs that binary with an executable module handle from
//! an [`ExecutionEngine`](playground_engine::ExecutionEngine) and returns both
//! as one immutable [`CompiledArtifact`].

pub mod adapter;
pub mod artifact;
pub mod error;
pub mod format;

pub use adapter::CompilerAdapter;
pub use artifact::CompiledArtifact;
pub use error::CompileError;
pub use format::{FormatCompiler, WatFormatCompiler};
