use super::event::handle_event;
use super::ui::ui;
use crate::config::models::DemoConfig;
use crate::error::Result;
use crate::tui::components::item::DropdownItem;
use crate::tui::components::multi_dropdown::{ContainerStyle, MultiDropdownComponent};
use ratatui::crossterm::cursor::Show;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::Backend;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::info;

use std::io::{self, Write};

/// Demo host: owns the item pool and the authoritative selection.
pub struct App {
    pub items: Vec<DropdownItem<i64>>,
    pub selected_items: Vec<DropdownItem<i64>>,
    pub placeholder: String,
    pub container_style: ContainerStyle,
    pub dropdown: MultiDropdownComponent,
    pub shutdown: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: DemoConfig) -> App {
        App {
            items: config.dropdown_items(),
            selected_items: Vec::new(),
            placeholder: config.placeholder,
            container_style: ContainerStyle {
                max_width: config.max_width,
                ..Default::default()
            },
            dropdown: MultiDropdownComponent::new(),
            shutdown: false,
            status_message: None,
        }
    }

    /// Replace the selection with what the dropdown reported
    pub fn set_selected_items(&mut self, selected_items: Vec<DropdownItem<i64>>) {
        let values: Vec<i64> = selected_items.iter().map(|item| item.value).collect();
        info!(?values, "selection changed");

        self.status_message = Some(format!("{} item(s) selected", selected_items.len()));
        self.selected_items = selected_items;
    }

    pub fn run(config: DemoConfig) -> Result<()> {
        let mut app = App::new(config);

        enable_raw_mode()?;
        let mut stderr = io::stderr();
        let res = match execute!(stderr, EnterAlternateScreen, EnableMouseCapture) {
            Ok(()) => Terminal::new(CrosstermBackend::new(stderr))
                .map_err(Into::into)
                .and_then(|mut terminal| run_app(&mut terminal, &mut app)),
            Err(e) => Err(e.into()),
        };

        let restored = restore_terminal(&mut io::stderr(), disable_raw_mode());
        res.and(restored)
    }
}

/// Leave the alternate screen, stop mouse reporting and show the cursor, even
/// when leaving raw mode already failed. The first error wins.
fn restore_terminal<W: Write>(writer: &mut W, raw_mode: io::Result<()>) -> Result<()> {
    let screen = execute!(writer, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw_mode.and(screen).map_err(Into::into)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    info!(items = app.items.len(), "dropdown demo started");
    loop {
        if app.shutdown {
            info!("dropdown demo stopped");
            return Ok(());
        }

        terminal.draw(|frame| ui(frame, app))?;

        handle_event(app)?;
    }
}
