//! End-to-end test: archives are complete, reproducible and runnable.

use playground_engine::ExecutionEngine;
use playground_packager::unpack;
use playground_tests::{constant_module, pipeline, Harness};

#[tokio::test]
async fn archive_has_four_named_entries() {
    let mut p = pipeline();
    let source = constant_module(42);
    let artifact = p.compile(&source).await.unwrap();
    let archive = p.package().await.unwrap();

    let entries = unpack(archive.bytes()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["module.wasm", "source.wat", "index.html", "README.md"]);
    assert_eq!(entries[0].bytes, artifact.binary());
    assert_eq!(entries[1].bytes, source.as_bytes());

    let html = String::from_utf8(entries[2].bytes.clone()).unwrap();
    assert!(html.contains("log_string"));
    assert!(html.contains("WASM log: "));
    let readme = String::from_utf8(entries[3].bytes.clone()).unwrap();
    assert!(readme.contains("python -m http.server"));
}

#[tokio::test]
async fn repackaging_is_byte_identical() {
    let mut p = pipeline();
    p.compile(&constant_module(7)).await.unwrap();
    let first = p.package().await.unwrap();
    let second = p.package().await.unwrap();
    assert_eq!(first.bytes(), second.bytes());

    // A fresh pipeline compiling the same source agrees too.
    let mut other = pipeline();
    other.compile(&constant_module(7)).await.unwrap();
    assert_eq!(other.package().await.unwrap().hash(), first.hash());
}

#[tokio::test]
async fn embedded_binary_reproduces_main() {
    let mut p = pipeline();
    let source = playground_catalog::ExampleKey::Factorial.source();
    let direct = p.compile_and_run(source).await.unwrap();
    let archive = p.package().await.unwrap();

    let entries = unpack(archive.bytes()).unwrap();
    let harness = Harness::new();
    let module = harness.adapter.engine().load(&entries[0].bytes).unwrap();
    let replayed = harness.sandbox.run(&module, None).unwrap();
    assert_eq!(replayed, direct);
}
