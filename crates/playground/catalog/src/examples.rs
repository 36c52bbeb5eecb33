use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic key of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKey {
    Hello,
    Addition,
    Factorial,
    Fibonacci,
    Logging,
    Greeting,
}

impl ExampleKey {
    pub const ALL: [ExampleKey; 6] = [
        Self::Hello,
        Self::Addition,
        Self::Factorial,
        Self::Fibonacci,
        Self::Logging,
        Self::Greeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Addition => "addition",
            Self::Factorial => "factorial",
            Self::Fibonacci => "fibonacci",
            Self::Logging => "logging",
            Self::Greeting => "greeting",
        }
    }

    pub fn example(&self) -> &'static Example {
        // Index matches declaration order in EXAMPLES.
        &EXAMPLES[*self as usize]
    }

    pub fn source(&self) -> &'static str {
        self.example().source
    }
}

impl fmt::Display for ExampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown example: {0}")]
pub struct UnknownExample(pub String);

impl FromStr for ExampleKey {
    type Err = UnknownExample;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownExample(s.to_string()))
    }
}

/// A canonical WAT source.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Example {
    pub key: ExampleKey,
    pub title: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    /// What `main` returns when the module runs against the default imports.
    pub expected_main: i32,
}

static EXAMPLES: [Example; 6] = [
    Example {
        key: ExampleKey::Hello,
        title: "Hello",
        description: "main returns the constant 42",
        source: HELLO,
        expected_main: 42,
    },
    Example {
        key: ExampleKey::Addition,
        title: "Addition",
        description: "main calls an exported add function with 5 and 37",
        source: ADDITION,
        expected_main: 42,
    },
    Example {
        key: ExampleKey::Factorial,
        title: "Factorial",
        description: "recursive factorial of 5",
        source: FACTORIAL,
        expected_main: 120,
    },
    Example {
        key: ExampleKey::Fibonacci,
        title: "Fibonacci",
        description: "iterative loop computing the 10th Fibonacci number",
        source: FIBONACCI,
        expected_main: 55,
    },
    Example {
        key: ExampleKey::Logging,
        title: "Logging",
        description: "calls env.log with 7 and 35 and returns their sum",
        source: LOGGING,
        expected_main: 42,
    },
    Example {
        key: ExampleKey::Greeting,
        title: "Greeting",
        description: "logs a string from linear memory through env.log_string",
        source: GREETING,
        expected_main: 0,
    },
];

/// Lookup over the fixed example set.
pub struct ExampleCatalog;

impl ExampleCatalog {
    pub fn all() -> &'static [Example] {
        &EXAMPLES
    }

    /// Look up by key string. Unknown keys are a caller error and yield `None`.
    pub fn get(key: &str) -> Option<&'static Example> {
        key.parse::<ExampleKey>().ok().map(|k| k.example())
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        EXAMPLES.iter().map(|e| e.key.as_str())
    }
}

const HELLO: &str = r#"(module
  (func $main (result i32)
    i32.const 42)
  (export "main" (func $main)))"#;

const ADDITION: &str = r#"(module
  (func $add (param $a i32) (param $b i32) (result i32)
    (i32.add (local.get $a) (local.get $b)))
  (func $main (result i32)
    (call $add (i32.const 5) (i32.const 37)))
  (export "main" (func $main))
  (export "add" (func $add)))"#;

const FACTORIAL: &str = r#"(module
  (func $factorial (param $n i32) (result i32)
    (local $result i32)
    (local.set $result (i32.const 1))
    (block $done
      (br_if $done
        (i32.lt_s
          (local.get $n)
          (i32.const 2)))
      (local.set $result
        (i32.mul
          (local.get $n)
          (call $factorial
            (i32.sub
              (local.get $n)
              (i32.const 1))))))
    (local.get $result))
  (func $main (result i32)
    (call $factorial (i32.const 5)))
  (export "main" (func $main))
  (export "factorial" (func $factorial)))"#;

const FIBONACCI: &str = r#"(module
  (func $fibonacci (param $n i32) (result i32)
    (local $i i32)
    (local $a i32)
    (local $b i32)
    (local $temp i32)
    (local.set $i (i32.const 1))
    (local.set $a (i32.const 0))
    (local.set $b (i32.const 1))
    (if (i32.le_s (local.get $n) (i32.const 0))
      (then
        (return (i32.const 0))))
    (if (i32.eq (local.get $n) (i32.const 1))
      (then
        (return (i32.const 1))))
    (loop $fib_loop
      (if (i32.lt_s (local.get $i) (local.get $n))
        (then
          (local.set $temp (i32.add (local.get $a) (local.get $b)))
          (local.set $a (local.get $b))
          (local.set $b (local.get $temp))
          (local.set $i (i32.add (local.get $i) (i32.const 1)))
          (br $fib_loop))))
    (local.get $b))
  (func $main (result i32)
    (call $fibonacci (i32.const 10)))
  (export "main" (func $main))
  (export "fibonacci" (func $fibonacci)))"#;

const LOGGING: &str = r#"(module
  (import "env" "log" (func $log (param i32) (result i32)))
  (func $main (result i32)
    (i32.add
      (call $log (i32.const 7))
      (call $log (i32.const 35))))
  (export "main" (func $main)))"#;

const GREETING: &str = r#"(module
  (import "env" "log_string" (func $log_string (param i32 i32)))
  (memory (export "memory") 1)
  (data (i32.const 16) "Hello, WebAssembly!")
  (func $main (result i32)
    (call $log_string (i32.const 16) (i32.const 19))
    (i32.const 0))
  (export "main" (func $main)))"#;
