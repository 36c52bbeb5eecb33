#[path = "property/compile_determinism.rs"]
mod compile_determinism;

#[path = "property/archive_determinism.rs"]
mod archive_determinism;

#[path = "property/execution_result.rs"]
mod execution_result;
