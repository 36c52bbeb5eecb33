//! End-to-end test: diagnostics are captured in emission order.

use playground_tests::pipeline;
use playground_types::LogEntry;

const LOG_SEVEN: &str = r#"(module
  (import "env" "log" (func $log (param i32) (result i32)))
  (func (export "main") (result i32) (call $log (i32.const 7))))"#;

#[tokio::test]
async fn log_seven_appends_one_entry_before_completion() {
    let mut p = pipeline();
    p.compile_and_run(LOG_SEVEN).await.unwrap();
    let logs = p.logs();
    let hits: Vec<usize> = logs
        .iter()
        .enumerate()
        .filter(|(_, e)| e.message == "WASM log: 7")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(logs[hits[0]], LogEntry::info("WASM log: 7"));
    let done = logs
        .iter()
        .position(|e| e.message == "WebAssembly execution completed!")
        .unwrap();
    assert!(hits[0] < done);
}

#[tokio::test]
async fn compile_clears_previous_run_logs() {
    let mut p = pipeline();
    p.compile_and_run(LOG_SEVEN).await.unwrap();
    p.compile(LOG_SEVEN).await.unwrap();
    assert_eq!(p.logbook().messages(), vec!["Successfully compiled WAT to WASM!"]);
}

#[tokio::test]
async fn interceptor_collects_foreign_events_until_released() {
    let mut p = pipeline();
    p.compile(LOG_SEVEN).await.unwrap();
    {
        let _guard = p.intercept();
        tracing::info!(component = "host", "external notice");
        p.run().await.unwrap();
    }
    tracing::info!("not captured");

    let messages = p.logbook().messages();
    assert!(messages.contains(&"external notice component=host".to_string()));
    assert!(!messages.iter().any(|m| m == "not captured"));
    assert_eq!(messages.iter().filter(|m| *m == "WASM log: 7").count(), 1);
}

#[tokio::test]
async fn clear_logs_empties_sequence() {
    let mut p = pipeline();
    p.compile_and_run(LOG_SEVEN).await.unwrap();
    p.clear_logs();
    assert!(p.logs().is_empty());
    assert_eq!(p.output(), "");
}
