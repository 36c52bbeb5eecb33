#![deny(unsafe_code)]
//! # playground-sandbox
//!
//! Runs a compiled module once, in a fresh instance, against the default
//! `env` imports merged with any caller-supplied host functions.

pub mod error;
pub mod sandbox;

pub use error::RuntimeError;
pub use sandbox::ExecutionSandbox;
