use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::models::DemoConfig;
use crate::error::{AppError, Result};

/// Read the demo config, falling back to defaults when the file is absent or empty
pub fn read_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DemoConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(DemoConfig::default());
    }

    let config: DemoConfig = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    info!(path = %path.display(), items = config.items.len(), "loaded config");
    Ok(config)
}

pub fn write_config(path: &Path, config: &DemoConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
