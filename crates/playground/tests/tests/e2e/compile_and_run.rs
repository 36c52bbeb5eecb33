//! End-to-end test: source text through compile and run.

use playground_pipeline::PipelineState;
use playground_tests::{constant_module, pipeline};
use playground_types::NumericValue;

#[tokio::test]
async fn identical_source_identical_binary() {
    let mut p = pipeline();
    let source = constant_module(42);
    let first = p.compile(&source).await.unwrap();
    let second = p.compile(&source).await.unwrap();
    assert_eq!(first.binary(), second.binary());
    assert_eq!(first.hash(), second.hash());
}

#[tokio::test]
async fn constant_main_result() {
    let mut p = pipeline();
    let result = p.compile_and_run(&constant_module(42)).await.unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I32(42)));
    assert_eq!(result.len(), 1);
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"main":42}"#);
}

#[tokio::test]
async fn no_main_is_empty_success() {
    let mut p = pipeline();
    let result = p
        .compile_and_run(r#"(module (func (export "helper") (result i32) i32.const 1))"#)
        .await
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(p.output(), "No results returned");
    assert_eq!(p.state(), PipelineState::Ran);
}

#[tokio::test]
async fn other_numeric_types() {
    let mut p = pipeline();
    let result = p
        .compile_and_run(r#"(module (func (export "main") (result f64) f64.const 2.5))"#)
        .await
        .unwrap();
    assert_eq!(result.main(), Some(&NumericValue::F64(2.5)));

    let result = p
        .compile_and_run(
            r#"(module (func (export "main") (result i64) i64.const 9007199254740993))"#,
        )
        .await
        .unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I64(9_007_199_254_740_993)));
}

#[tokio::test]
async fn new_compile_supersedes_artifact() {
    let mut p = pipeline();
    p.compile_and_run(&constant_module(1)).await.unwrap();
    let first = p.artifact().unwrap().hash();
    p.compile(&constant_module(2)).await.unwrap();
    assert_ne!(p.artifact().unwrap().hash(), first);
    assert_eq!(p.state(), PipelineState::Compiled);
    assert!(p.last_result().is_none());
    let result = p.run().await.unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I32(2)));
}
