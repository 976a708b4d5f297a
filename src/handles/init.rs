use crate::{
    cli::GlobalArgs,
    config::{CONFIG_FILE_NAME, ConfigManager, loader, models::DemoConfig},
    error::{AppError, Result},
    logging,
    output,
};
use tracing::info;

pub fn handle(global: GlobalArgs, force: bool) -> Result<()> {
    logging::init_logging(global.quiet);

    let path = match global.config {
        Some(path) => path,
        None => ConfigManager::default_base_path()?.join(CONFIG_FILE_NAME),
    };

    if path.exists() && !force {
        return Err(AppError::ConfigExists(path));
    }

    loader::write_config(&path, &DemoConfig::default())?;
    info!(path = %path.display(), "wrote default config");
    output::show_success(&format!("Config written to {}", path.display()));
    Ok(())
}
