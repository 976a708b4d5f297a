use crate::{cli::GlobalArgs, config::ConfigManager, error::Result, logging, tui};
use tracing::info;

pub fn handle(global: GlobalArgs) -> Result<()> {
    let config_manager = ConfigManager::new(global.config.as_deref())?;
    logging::init_file_logging(&config_manager.log_path(), global.quiet)?;
    info!(config = %config_manager.config_path.display(), "loaded demo config");
    tui::run(config_manager.config)
}
