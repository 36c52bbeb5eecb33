//! Engine-neutral host functions and import tables.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use playground_diagnostics::DiagnosticSink;
use playground_types::{NumericValue, ValueType};
use serde::{Deserialize, Serialize};

/// Parameter and result types of a host function.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub params: Vec<ValueType>,
    pub results: Vec<ValueType>,
}

impl FunctionSignature {
    pub fn new(
        params: impl IntoIterator<Item = ValueType>,
        results: impl IntoIterator<Item = ValueType>,
    ) -> Self {
        Self {
            params: params.into_iter().collect(),
            results: results.into_iter().collect(),
        }
    }

    fn accepts(&self, values: &[NumericValue], types: &[ValueType]) -> bool {
        values.len() == types.len()
            && values.iter().zip(types).all(|(v, t)| v.value_type() == *t)
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |types: &[ValueType]| {
            types
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "({}) -> ({})", join(&self.params), join(&self.results))
    }
}

/// A trap raised by host code; aborts the running guest call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HostTrap(pub String);

impl HostTrap {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Read access to the calling instance's linear memory.
pub trait HostMemory {
    fn read(&mut self, offset: u32, len: u32) -> Result<Vec<u8>, HostTrap>;
}

/// What a host function can reach while it runs.
pub struct HostContext<'a> {
    memory: &'a mut dyn HostMemory,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> HostContext<'a> {
    pub fn new(memory: &'a mut dyn HostMemory, sink: &'a dyn DiagnosticSink) -> Self {
        Self { memory, sink }
    }

    pub fn read_memory(&mut self, offset: u32, len: u32) -> Result<Vec<u8>, HostTrap> {
        self.memory.read(offset, len)
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink
    }
}

type HostCallback =
    dyn Fn(&mut HostContext<'_>, &[NumericValue]) -> Result<Vec<NumericValue>, HostTrap>
        + Send
        + Sync;

/// A host function importable by guest modules.
#[derive(Clone)]
pub struct HostFunction {
    signature: FunctionSignature,
    callback: Arc<HostCallback>,
}

impl HostFunction {
    pub fn new<F>(signature: FunctionSignature, callback: F) -> Self
    where
        F: Fn(&mut HostContext<'_>, &[NumericValue]) -> Result<Vec<NumericValue>, HostTrap>
            + Send
            + Sync
            + 'static,
    {
        Self {
            signature,
            callback: Arc::new(callback),
        }
    }

    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    /// Invoke the callback, checking arguments and results against the
    /// declared signature.
    pub fn call(
        &self,
        ctx: &mut HostContext<'_>,
        args: &[NumericValue],
    ) -> Result<Vec<NumericValue>, HostTrap> {
        if !self.signature.accepts(args, &self.signature.params) {
            return Err(HostTrap::new(format!(
                "host function expects {} but was called with {} argument(s)",
                self.signature,
                args.len()
            )));
        }
        let results = (self.callback)(ctx, args)?;
        if !self.signature.accepts(&results, &self.signature.results) {
            return Err(HostTrap::new(format!(
                "host function declared {} but returned {} value(s)",
                self.signature,
                results.len()
            )));
        }
        Ok(results)
    }
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostFunction")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Namespace → function name → host function.
#[derive(Clone, Debug, Default)]
pub struct ImportTable {
    namespaces: BTreeMap<String, BTreeMap<String, HostFunction>>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or replace) one function.
    pub fn define(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        function: HostFunction,
    ) -> &mut Self {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(name.into(), function);
        self
    }

    /// Builder form of [`define`](Self::define).
    pub fn with(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        function: HostFunction,
    ) -> Self {
        self.define(namespace, name, function);
        self
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<&HostFunction> {
        self.namespaces.get(namespace).and_then(|fns| fns.get(name))
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.get(namespace, name).is_some()
    }

    /// Every `(namespace, name, function)` triple in sorted order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &str, &HostFunction)> {
        self.namespaces.iter().flat_map(|(ns, fns)| {
            fns.iter()
                .map(move |(name, f)| (ns.as_str(), name.as_str(), f))
        })
    }

    pub fn len(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Merging is per function: an override replaces only the function with
    /// the same namespace and name, other defaults in that namespace stay.
    pub fn merged_with(mut self, overrides: &ImportTable) -> Self {
        for (namespace, name, function) in overrides.functions() {
            self.define(namespace, name, function.clone());
        }
        self
    }
}
