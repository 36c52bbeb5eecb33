#[path = "e2e/compile_and_run.rs"]
mod compile_and_run;

#[path = "e2e/catalog_examples.rs"]
mod catalog_examples;

#[path = "e2e/failure_recovery.rs"]
mod failure_recovery;

#[path = "e2e/packaging.rs"]
mod packaging;

#[path = "e2e/log_capture.rs"]
mod log_capture;
