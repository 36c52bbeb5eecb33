//! Property tests: execution results keep insertion order with unique keys.

use playground_types::{ExecutionResult, NumericValue};
use proptest::prelude::*;

fn numeric_value() -> impl Strategy<Value = NumericValue> {
    prop_oneof![
        any::<i32>().prop_map(NumericValue::I32),
        any::<i64>().prop_map(NumericValue::I64),
        (-1.0e6f32..1.0e6f32).prop_map(NumericValue::F32),
        (-1.0e12f64..1.0e12f64).prop_map(NumericValue::F64),
    ]
}

/// Parse a serialized number back at the width it was written with.
fn reads_back_exactly(text: &str, value: &NumericValue) -> bool {
    match value {
        NumericValue::I32(v) => text.parse::<i32>().ok() == Some(*v),
        NumericValue::I64(v) => text.parse::<i64>().ok() == Some(*v),
        NumericValue::F32(v) => text.parse::<f32>().ok() == Some(*v),
        NumericValue::F64(v) => text.parse::<f64>().ok() == Some(*v),
    }
}

proptest! {
    #[test]
    fn keys_stay_unique(ops in prop::collection::vec(("[a-d]", any::<i32>()), 0..32)) {
        let mut result = ExecutionResult::new();
        let mut expected: Vec<(String, i32)> = Vec::new();
        for (key, value) in &ops {
            result.insert(key.clone(), NumericValue::I32(*value));
            match expected.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = *value,
                None => expected.push((key.clone(), *value)),
            }
        }
        prop_assert_eq!(result.len(), expected.len());
        for ((k, v), (ek, ev)) in result.iter().zip(&expected) {
            prop_assert_eq!(k, ek.as_str());
            prop_assert_eq!(v, &NumericValue::I32(*ev));
        }
    }

    #[test]
    fn json_keeps_order_and_exact_numbers(values in prop::collection::vec(numeric_value(), 0..8)) {
        let result: ExecutionResult = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("k{i}"), *v))
            .collect();
        let json = serde_json::to_string(&result).unwrap();
        let mut fields = Vec::new();
        for (i, value) in values.iter().enumerate() {
            let text = serde_json::to_string(value).unwrap();
            prop_assert!(reads_back_exactly(&text, value), "{text} vs {value:?}");
            fields.push(format!("\"k{i}\":{text}"));
        }
        prop_assert_eq!(json, format!("{{{}}}", fields.join(",")));
    }

    #[test]
    fn formatted_output_has_one_line_per_key(values in prop::collection::vec(any::<i32>(), 1..8)) {
        let result: ExecutionResult = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("k{i}"), NumericValue::I32(*v)))
            .collect();
        let output = result.format_output();
        prop_assert_eq!(output.lines().count(), values.len());
        prop_assert!(output.lines().all(|l| l.contains(": ")));
    }
}
