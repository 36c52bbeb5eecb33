//! End-to-end test: failures leave the pipeline usable and are logged once.

use playground_packager::{PackageLayout, PackagingError};
use playground_pipeline::{ErrorKind, Pipeline, PipelineConfig, PipelineError, PipelineState};
use playground_tests::{constant_module, pipeline};
use playground_types::{LogKind, NumericValue};

#[tokio::test]
async fn unbalanced_parens_keep_prior_artifact() {
    let mut p = pipeline();
    p.compile(&constant_module(42)).await.unwrap();
    let hash = p.artifact().unwrap().hash();

    let err = p
        .compile(r#"(module (func (export "main") (result i32) i32.const 1)"#)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Compile);
    assert_eq!(p.artifact().unwrap().hash(), hash);
    assert_eq!(p.state(), PipelineState::Compiled);

    let result = p.run().await.unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I32(42)));
}

#[tokio::test]
async fn each_failure_logs_exactly_one_error() {
    let mut p = pipeline();

    p.run().await.unwrap_err();
    assert_eq!(p.logbook().count(LogKind::Error), 1);

    p.package().await.unwrap_err();
    assert_eq!(p.logbook().count(LogKind::Error), 2);

    p.compile("(module").await.unwrap_err();
    assert_eq!(p.logbook().count(LogKind::Error), 3);

    // A successful compile starts a fresh log.
    p.compile(r#"(module (func (export "main") (result i32) unreachable))"#)
        .await
        .unwrap();
    assert_eq!(p.logbook().count(LogKind::Error), 0);

    let err = p.run().await.unwrap_err();
    assert!(matches!(err, PipelineError::Runtime(_)));
    assert_eq!(p.logbook().count(LogKind::Error), 1);
    assert_eq!(p.state(), PipelineState::RunFailed);
}

#[tokio::test]
async fn instantiation_trap_is_runtime_error() {
    let mut p = pipeline();
    p.compile(r#"(module (import "env" "missing" (func)) (func (export "main")))"#)
        .await
        .unwrap();
    let err = p.run().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
    let report = err.report();
    assert!(report.message.starts_with("Runtime error: "));
}

#[tokio::test]
async fn run_failed_recovers_on_next_compile() {
    let mut p = pipeline();
    p.compile_and_run(r#"(module (func (export "main") (result i32) unreachable))"#)
        .await
        .unwrap_err();
    assert_eq!(p.state(), PipelineState::RunFailed);

    let result = p.compile_and_run(&constant_module(5)).await.unwrap();
    assert_eq!(result.main(), Some(&NumericValue::I32(5)));
    assert_eq!(p.state(), PipelineState::Ran);
}

#[tokio::test]
async fn clashing_layout_yields_no_archive() {
    let config = PipelineConfig {
        layout: PackageLayout {
            readme: "index.html".into(),
            ..PackageLayout::default()
        },
        ..PipelineConfig::default()
    };
    let mut p = Pipeline::new(config).unwrap();
    p.compile_and_run(&constant_module(7)).await.unwrap();
    let logs_before = p.logbook().len();

    let err = p.package().await.unwrap_err();
    assert_eq!(
        err,
        PipelineError::Packaging(PackagingError::DuplicateEntry("index.html".into()))
    );
    assert_eq!(err.kind(), ErrorKind::Packaging);
    assert_eq!(p.state(), PipelineState::Ran);
    assert_eq!(p.output(), "main: 7");

    let errors: Vec<_> = p
        .logs()
        .into_iter()
        .filter(|e| e.kind == LogKind::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .message
        .starts_with("Failed to create download package: "));
    assert_eq!(p.logbook().len(), logs_before + 1);
    assert!(!p
        .logs()
        .iter()
        .any(|e| e.message == "Successfully created the WASM package!"));
}
