use crate::{
    cli::GlobalArgs,
    config::ConfigManager,
    error::Result,
    logging,
    output,
    tui::components::item::filter_items,
};

pub fn handle(global: GlobalArgs, query: Option<String>) -> Result<()> {
    logging::init_logging(global.quiet);
    let config_manager = ConfigManager::new(global.config.as_deref())?;

    let items = config_manager.config.dropdown_items();
    let query = query.unwrap_or_default();
    let visible = filter_items(&items, &query);

    if visible.is_empty() {
        output::show_info(&format!("No items match '{query}'."));
        return Ok(());
    }

    output::display_items(&visible);
    Ok(())
}
