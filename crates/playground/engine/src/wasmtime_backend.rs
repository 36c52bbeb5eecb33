//! [`ExecutionEngine`] backed by wasmtime.

use playground_diagnostics::SharedSink;
use playground_types::{NumericValue, ValueType};
use serde::{Deserialize, Serialize};
use wasmtime::{Caller, Config, Engine, Extern, FuncType, Instance, Linker, Module, Store, Val, ValType};

use crate::defaults::MEMORY_EXPORT;
use crate::engine::ExecutionEngine;
use crate::error::EngineError;
use crate::imports::{FunctionSignature, HostContext, HostMemory, HostTrap, ImportTable};

/// Resource limits applied to every instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Instruction budget per instance. `None` disables fuel metering.
    pub fuel_limit: Option<u64>,
    /// Maximum native stack (bytes) guest code may use.
    pub max_wasm_stack: Option<usize>,
}

/// Per-store host data.
struct HostState {
    sink: SharedSink,
}

/// A live instance together with the store that owns it.
pub struct WasmtimeInstance {
    store: Store<HostState>,
    instance: Instance,
}

pub struct WasmtimeEngine {
    engine: Engine,
    config: EngineConfig,
}

impl WasmtimeEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let mut wasm_config = Config::new();
        wasm_config.consume_fuel(config.fuel_limit.is_some());
        if let Some(bytes) = config.max_wasm_stack {
            wasm_config.max_wasm_stack(bytes);
        }
        let engine = Engine::new(&wasm_config).map_err(|e| EngineError::Configuration(describe(&e)))?;
        Ok(Self { engine, config })
    }

    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl ExecutionEngine for WasmtimeEngine {
    type Module = Module;
    type Instance = WasmtimeInstance;

    fn name(&self) -> &str {
        "wasmtime"
    }

    fn load(&self, binary: &[u8]) -> Result<Module, EngineError> {
        Module::from_binary(&self.engine, binary).map_err(|e| EngineError::Load(describe(&e)))
    }

    fn instantiate(
        &self,
        module: &Module,
        imports: &ImportTable,
        sink: SharedSink,
    ) -> Result<WasmtimeInstance, EngineError> {
        let mut store = Store::new(&self.engine, HostState { sink });
        if let Some(fuel) = self.config.fuel_limit {
            store
                .set_fuel(fuel)
                .map_err(|e| EngineError::Configuration(describe(&e)))?;
        }

        let mut linker: Linker<HostState> = Linker::new(&self.engine);
        for (namespace, name, function) in imports.functions() {
            let ty = func_type(&self.engine, function.signature());
            let function = function.clone();
            linker
                .func_new(namespace, name, ty, move |mut caller, params, results| {
                    let args = params
                        .iter()
                        .map(from_val)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(wasmtime::Error::msg)?;
                    let sink = caller.data().sink.clone();
                    let mut memory = CallerMemory {
                        caller: &mut caller,
                    };
                    let mut ctx = HostContext::new(&mut memory, sink.as_ref());
                    let outputs = function.call(&mut ctx, &args).map_err(wasmtime::Error::msg)?;
                    for (slot, value) in results.iter_mut().zip(outputs) {
                        *slot = to_val(value);
                    }
                    Ok(())
                })
                .map_err(|e| EngineError::Instantiation(describe(&e)))?;
        }

        let instance = linker
            .instantiate(&mut store, module)
            .map_err(|e| EngineError::Instantiation(describe(&e)))?;
        tracing::debug!(imports = imports.len(), "instance created");
        Ok(WasmtimeInstance { store, instance })
    }

    fn has_entry_point(&self, instance: &mut WasmtimeInstance, name: &str) -> bool {
        instance
            .instance
            .get_func(&mut instance.store, name)
            .is_some_and(|f| f.ty(&instance.store).params().len() == 0)
    }

    fn invoke(
        &self,
        instance: &mut WasmtimeInstance,
        name: &str,
    ) -> Result<Vec<NumericValue>, EngineError> {
        let func = instance
            .instance
            .get_func(&mut instance.store, name)
            .ok_or_else(|| EngineError::ExportNotFound(name.to_string()))?;
        let ty = func.ty(&instance.store);
        if ty.params().len() != 0 {
            return Err(EngineError::UnsupportedSignature(format!(
                "`{name}` takes {} parameter(s)",
                ty.params().len()
            )));
        }

        let mut results = vec![Val::I32(0); ty.results().len()];
        func.call(&mut instance.store, &[], &mut results)
            .map_err(|e| EngineError::Trap(describe(&e)))?;
        results
            .iter()
            .map(|v| from_val(v).map_err(EngineError::UnsupportedSignature))
            .collect()
    }
}

/// Guest memory as seen from inside a host call.
struct CallerMemory<'a, 'b> {
    caller: &'a mut Caller<'b, HostState>,
}

impl HostMemory for CallerMemory<'_, '_> {
    fn read(&mut self, offset: u32, len: u32) -> Result<Vec<u8>, HostTrap> {
        let memory = match self.caller.get_export(MEMORY_EXPORT) {
            Some(Extern::Memory(memory)) => memory,
            _ => {
                return Err(HostTrap::new(format!(
                    "module does not export a linear memory named `{MEMORY_EXPORT}`"
                )))
            }
        };
        let start = offset as usize;
        let end = start + len as usize;
        if end > memory.data_size(&*self.caller) {
            return Err(HostTrap::new(format!(
                "out of bounds memory access: {start}..{end}"
            )));
        }
        let mut buf = vec![0u8; len as usize];
        memory
            .read(&*self.caller, start, &mut buf)
            .map_err(|e| HostTrap::new(e.to_string()))?;
        Ok(buf)
    }
}

fn func_type(engine: &Engine, signature: &FunctionSignature) -> FuncType {
    FuncType::new(
        engine,
        signature.params.iter().map(to_val_type),
        signature.results.iter().map(to_val_type),
    )
}

fn to_val_type(ty: &ValueType) -> ValType {
    match ty {
        ValueType::I32 => ValType::I32,
        ValueType::I64 => ValType::I64,
        ValueType::F32 => ValType::F32,
        ValueType::F64 => ValType::F64,
    }
}

fn from_val(val: &Val) -> Result<NumericValue, String> {
    match val {
        Val::I32(v) => Ok(NumericValue::I32(*v)),
        Val::I64(v) => Ok(NumericValue::I64(*v)),
        Val::F32(bits) => Ok(NumericValue::F32(f32::from_bits(*bits))),
        Val::F64(bits) => Ok(NumericValue::F64(f64::from_bits(*bits))),
        other => Err(format!("non-numeric value of type {:?}", other)),
    }
}

fn to_val(value: NumericValue) -> Val {
    match value {
        NumericValue::I32(v) => Val::I32(v),
        NumericValue::I64(v) => Val::I64(v),
        NumericValue::F32(v) => Val::F32(v.to_bits()),
        NumericValue::F64(v) => Val::F64(v.to_bits()),
    }
}

/// Innermost cause only; wasmtime wraps traps in backtrace context.
fn describe(error: &wasmtime::Error) -> String {
    error.root_cause().to_string()
}
