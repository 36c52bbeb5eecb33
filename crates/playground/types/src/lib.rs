#![deny(unsafe_code)]
//! # playground-types
//!
//! Value types shared by every stage of the WASM playground pipeline.
//!
//! - [`ContentHash`]: BLAKE3 digest used to address binaries and archives
//! - [`LogEntry`] / [`LogKind`]: one captured diagnostic line
//! - [`NumericValue`]: a WebAssembly numeric value crossing the host boundary
//! - [`ExecutionResult`]: insertion-ordered export name → value mapping

pub mod hash;
pub mod log;
pub mod result;
pub mod value;

pub use hash::{ContentHash, ContentHashError};
pub use log::{LogEntry, LogKind};
pub use result::ExecutionResult;
pub use value::{NumericValue, ValueType};
