#![deny(unsafe_code)]
//! # playground-pipeline
//!
//! The compile → run → package orchestrator.
//!
//! A [`Pipeline`] owns one artifact slot and one [`LogBook`](playground_diagnostics::LogBook).
//! Compiles, runs and packaging are `async` and push their CPU-bound work onto
//! tokio's blocking pool. Every failure comes back as a [`PipelineError`] and
//! leaves exactly one `error` entry in the log; nothing here ends the process.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod state;

pub use config::PipelineConfig;
pub use error::{ErrorKind, ErrorReport, PipelineError};
pub use pipeline::Pipeline;
pub use state::PipelineState;
