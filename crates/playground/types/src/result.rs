//! Execution results keyed by export name.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value::NumericValue;

/// Mapping from export name to the value it returned.
///
/// Keys are unique and iteration follows insertion order. Re-inserting an
/// existing key replaces its value in place. Serializes as a JSON object in
/// that order; it is output only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionResult {
    entries: Vec<(String, NumericValue)>,
}

impl ExecutionResult {
    /// Key recorded for the entry point's return value.
    pub const MAIN: &'static str = "main";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: NumericValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&NumericValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Value returned by the entry point, if it ran and returned one.
    pub fn main(&self) -> Option<&NumericValue> {
        self.get(Self::MAIN)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NumericValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `key: value` lines, or `No results returned` when empty.
    pub fn format_output(&self) -> String {
        if self.entries.is_empty() {
            return "No results returned".to_string();
        }
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<(String, NumericValue)> for ExecutionResult {
    fn from_iter<I: IntoIterator<Item = (String, NumericValue)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (k, v) in iter {
            result.insert(k, v);
        }
        result
    }
}

impl Serialize for ExecutionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
