use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not find home directory")]
    HomeDirNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Config file already exists: {} (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    #[error("Duplicate item value {0} in config; every item needs a unique value")]
    DuplicateValue(i64),
}

pub type Result<T> = std::result::Result<T, AppError>;
