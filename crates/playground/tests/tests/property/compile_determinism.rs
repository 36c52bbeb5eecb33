//! Property tests: compiling the same text twice gives the same bytes, and a
//! constant `main` returns exactly that constant.

use playground_tests::{constant_module, Harness};
use playground_types::NumericValue;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Arithmetic expression over i32 constants, as WAT folded instructions.
fn arb_expr() -> impl Strategy<Value = (String, i32)> {
    let leaf = any::<i32>().prop_map(|v| (format!("(i32.const {v})"), v));
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), inner, prop_oneof![Just("add"), Just("sub"), Just("mul")]).prop_map(
            |((l, lv), (r, rv), op)| {
                let value = match op {
                    "add" => lv.wrapping_add(rv),
                    "sub" => lv.wrapping_sub(rv),
                    _ => lv.wrapping_mul(rv),
                };
                (format!("(i32.{op} {l} {r})"), value)
            },
        )
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn same_source_same_binary(value in any::<i32>()) {
        let harness = Harness::new();
        let source = constant_module(value);
        let a = harness.adapter.compile(&source).unwrap();
        let b = harness.adapter.compile(&source).unwrap();
        prop_assert_eq!(a.binary(), b.binary());
        prop_assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn constant_main_round_trips(value in any::<i32>()) {
        let harness = Harness::new();
        let artifact = harness.adapter.compile(&constant_module(value)).unwrap();
        let result = harness.sandbox.run(artifact.module(), None).unwrap();
        prop_assert_eq!(result.main(), Some(&NumericValue::I32(value)));
    }

    #[test]
    fn folded_arithmetic_matches_host((expr, expected) in arb_expr()) {
        let harness = Harness::new();
        let source = format!(r#"(module (func (export "main") (result i32) {expr}))"#);
        let artifact = harness.adapter.compile(&source).unwrap();
        let result = harness.sandbox.run(artifact.module(), None).unwrap();
        prop_assert_eq!(result.main(), Some(&NumericValue::I32(expected)));
    }
}
