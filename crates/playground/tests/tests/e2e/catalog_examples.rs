//! End-to-end test: every catalog example compiles and returns its
//! documented value.

use playground_catalog::{ExampleCatalog, ExampleKey};
use playground_tests::pipeline;
use playground_types::NumericValue;

#[tokio::test]
async fn every_example_matches_expected_main() {
    let mut p = pipeline();
    for example in ExampleCatalog::all() {
        let result = p.compile_and_run(example.source).await.unwrap();
        assert_eq!(
            result.main(),
            Some(&NumericValue::I32(example.expected_main)),
            "example {}",
            example.key
        );
    }
}

#[tokio::test]
async fn factorial_and_fibonacci() {
    let mut p = pipeline();
    let source = p.load_example(ExampleKey::Factorial);
    let result = p.compile_and_run(source).await.unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I32(120)));
    assert_eq!(p.output(), "main: 120");

    let source = p.load_example(ExampleKey::Fibonacci);
    let result = p.compile_and_run(source).await.unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I32(55)));
}

#[tokio::test]
async fn greeting_logs_from_memory() {
    let mut p = pipeline();
    p.compile_and_run(ExampleKey::Greeting.source()).await.unwrap();
    assert!(p
        .logbook()
        .messages()
        .contains(&"WASM log: Hello, WebAssembly!".to_string()));
}

#[test]
fn unknown_key_is_none() {
    assert!(ExampleCatalog::get("does-not-exist").is_none());
    assert!(ExampleCatalog::get("FACTORIAL").is_some());
}
