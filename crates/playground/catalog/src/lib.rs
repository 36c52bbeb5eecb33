#![deny(unsafe_code)]
//! # playground-catalog
//!
//! Read-only catalog of canonical WAT sources, fixed at compile time.
//!
//! Use [`ExampleKey`] for infallible access, or [`ExampleCatalog::get`] when
//! the key arrives as a string.

pub mod examples;

pub use examples::{Example, ExampleCatalog, ExampleKey, UnknownExample};
