//! CLI configuration file

use std::path::{Path, PathBuf};

use playground_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pipeline settings
    pub pipeline: PipelineConfig,
}

impl CliConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(Path::new(path)),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/wasm-playground/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wasm-playground").join("config.toml"))
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }
}
