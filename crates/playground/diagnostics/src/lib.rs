#![deny(unsafe_code)]
//! # playground-diagnostics
//!
//! Diagnostic capture for the playground pipeline.
//!
//! Every component receives a [`DiagnosticSink`] explicitly. The default sink,
//! [`LogBook`], appends to an ordered in-memory log and forwards each entry to
//! the `tracing` channel under [`DIAGNOSTIC_TARGET`].
//!
//! [`LogInterceptor`] covers emissions that do not go through a sink: while
//! its guard is held, `tracing` events on the current thread are appended to a
//! `LogBook` as `info` entries and still reach the previously installed
//! subscriber. Dropping the guard restores the previous subscriber.

pub mod interceptor;
pub mod sink;

pub use interceptor::{CaptureLayer, InterceptorGuard, LogInterceptor};
pub use sink::{DiagnosticSink, LogBook, SharedSink, DIAGNOSTIC_TARGET};
