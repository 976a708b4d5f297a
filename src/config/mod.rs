use self::models::DemoConfig;
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

pub mod loader;
pub mod models;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "mdd.log";

pub struct ConfigManager {
    pub config: DemoConfig,
    pub base_path: PathBuf,
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// Load from `~/.config/multi-dropdown`, or from `config_path` when given
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let base_path = Self::default_base_path()?;
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_path.join(CONFIG_FILE_NAME));

        let config = loader::read_config(&config_path)?;

        Ok(Self {
            config,
            base_path,
            config_path,
        })
    }

    pub fn default_base_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        Ok(home.join(".config").join("multi-dropdown"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.base_path.join(LOG_FILE_NAME)
    }
}
