//! Loading `SimConfig` from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use arena_core::error::EngineError;
use arena_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] EngineError),
}

/// Parse a config document. Missing fields keep their defaults.
pub fn parse_config(json: &str) -> Result<SimConfig, ConfigError> {
    let config: SimConfig = serde_json::from_str(json)?;
    config.tuning.validate()?;
    Ok(config)
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&json)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}
