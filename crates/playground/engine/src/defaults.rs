//! The `env` namespace every playground module may import.

use std::fmt::Display;

use playground_types::{NumericValue, ValueType};

use crate::imports::{FunctionSignature, HostFunction, HostTrap, ImportTable};

pub const ENV_NAMESPACE: &str = "env";
pub const LOG: &str = "log";
pub const LOG_STRING: &str = "log_string";
/// Export that `log_string` reads from.
pub const MEMORY_EXPORT: &str = "memory";

/// Message recorded for every guest log call.
pub fn log_message(value: impl Display) -> String {
    format!("WASM log: {value}")
}

/// Default imports:
///
/// - `env.log(i32) -> i32` records `WASM log: <value>` and returns the value
/// - `env.log_string(ptr: i32, len: i32)` records `WASM log: <text>` for the
///   UTF-8 bytes at `ptr..ptr+len` of the exported `memory`
pub fn default_imports() -> ImportTable {
    ImportTable::new()
        .with(ENV_NAMESPACE, LOG, log())
        .with(ENV_NAMESPACE, LOG_STRING, log_string())
}

fn log() -> HostFunction {
    HostFunction::new(
        FunctionSignature::new([ValueType::I32], [ValueType::I32]),
        |ctx, args| match args {
            [value] => {
                ctx.sink().info(&log_message(value));
                Ok(vec![*value])
            }
            _ => Err(HostTrap::new("log expects one argument")),
        },
    )
}

fn log_string() -> HostFunction {
    HostFunction::new(
        FunctionSignature::new([ValueType::I32, ValueType::I32], []),
        |ctx, args| match args {
            [NumericValue::I32(ptr), NumericValue::I32(len)] => {
                // Guest pointers are unsigned.
                let bytes = ctx.read_memory(*ptr as u32, *len as u32)?;
                let text = String::from_utf8_lossy(&bytes);
                ctx.sink().info(&log_message(text));
                Ok(vec![])
            }
            _ => Err(HostTrap::new("log_string expects (i32, i32)")),
        },
    )
}
