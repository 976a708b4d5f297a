use super::app::App;
use crate::error::Result;
use crate::tui::components::multi_dropdown::MultiDropdownProps;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

pub mod multi_dropdown;

use multi_dropdown::DropdownOutcome;

pub fn handle_event(app: &mut App) -> Result<()> {
    let event = event::read()?;
    dispatch(app, &event);
    Ok(())
}

/// Offer an event to the dropdown first; whatever it ignores drives the host.
pub fn dispatch(app: &mut App, event: &Event) {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Release
    {
        return;
    }

    let mut next_selection = None;
    let outcome = {
        let mut props = MultiDropdownProps::new(&app.items, &app.selected_items)
            .placeholder(&app.placeholder)
            .container_style(app.container_style)
            .on_change(|selection| next_selection = Some(selection));
        multi_dropdown::handle(&mut app.dropdown, &mut props, event)
    };

    if let Some(selection) = next_selection {
        app.set_selected_items(selection);
    }

    if outcome == DropdownOutcome::Ignored
        && let Event::Key(key) = event
    {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.shutdown = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => app.shutdown = true,
            _ => {}
        }
    }
}
