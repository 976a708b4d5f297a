use super::app::App;
use super::widgets::{bottom, header, multi_dropdown};
use crate::tui::components::multi_dropdown::MultiDropdownProps;
use ratatui::prelude::*;

pub fn ui(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    header::render(frame, layout[0], app);

    let body = layout[1].inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let props = MultiDropdownProps::new(&app.items, &app.selected_items)
        .placeholder(&app.placeholder)
        .container_style(app.container_style);
    multi_dropdown::render(frame, body, &props, &mut app.dropdown);

    bottom::render(frame, layout[2], app);
}
