use crate::config::models::DemoConfig;
use crate::error::Result;
use crate::tui::app::App;

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;
pub mod utils;
pub mod widgets;

pub fn run(config: DemoConfig) -> Result<()> {
    App::run(config)
}
