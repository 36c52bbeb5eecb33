use playground_engine::EngineConfig;
use playground_packager::PackageLayout;
use serde::{Deserialize, Serialize};

/// Fuel granted per run by [`PipelineConfig::sandboxed`].
pub const DEFAULT_FUEL: u64 = 50_000_000;

/// Native stack budget for guest code under [`PipelineConfig::sandboxed`].
pub const DEFAULT_MAX_WASM_STACK: usize = 512 * 1024;

/// Pipeline configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Zero-argument export invoked by `run`.
    pub entry_point: String,
    /// Instruction budget per run. `None` lets guest code loop forever.
    pub fuel_limit: Option<u64>,
    /// Native stack limit for guest code, in bytes.
    pub max_wasm_stack: Option<usize>,
    /// File name suggested for written archives.
    pub archive_name: String,
    /// Names of the entries inside the archive.
    pub layout: PackageLayout,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::sandboxed()
    }
}

impl PipelineConfig {
    /// Bounded execution: runaway loops and deep recursion trap.
    pub fn sandboxed() -> Self {
        Self {
            entry_point: "main".into(),
            fuel_limit: Some(DEFAULT_FUEL),
            max_wasm_stack: Some(DEFAULT_MAX_WASM_STACK),
            archive_name: "wasm-module.tar.gz".into(),
            layout: PackageLayout::default(),
        }
    }

    /// No fuel metering and the engine's default stack.
    pub fn permissive() -> Self {
        Self {
            fuel_limit: None,
            max_wasm_stack: None,
            ..Self::sandboxed()
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fuel_limit: self.fuel_limit,
            max_wasm_stack: self.max_wasm_stack,
        }
    }
}
