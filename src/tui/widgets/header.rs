use crate::tui::{app::App, components::multi_dropdown::DropdownPhase, theme::Theme};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

fn phase_label(app: &App) -> String {
    match app.dropdown.phase() {
        DropdownPhase::Closed => "[closed]".to_string(),
        DropdownPhase::OpenBrowsing => "[open]".to_string(),
        DropdownPhase::OpenSearching => format!("[searching \"{}\"]", app.dropdown.search_text()),
    }
}

/// Title bar: last selection change (or the app name) and the dropdown phase
pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = Theme::new();
    let heading = match &app.status_message {
        Some(msg) => Span::styled(msg.clone(), theme.text_highlight()),
        None => Span::styled("Multi Dropdown Demo", theme.text_normal()),
    };
    let line = Line::from(vec![
        heading,
        Span::raw("  "),
        Span::styled(phase_label(app), theme.text_dim()),
    ])
    .centered();

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.block_active()),
    );

    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::DemoConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn title_row(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, app)
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..buf.area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn header_tracks_dropdown_phase() {
        let mut app = App::new(DemoConfig::default());
        assert!(title_row(&app).contains("Multi Dropdown Demo  [closed]"));

        app.dropdown.toggle_open();
        assert!(title_row(&app).contains("[open]"));

        app.dropdown.show_search();
        app.dropdown.search_input_mut().enter_char('t');
        assert!(title_row(&app).contains("[searching \"t\"]"));
    }

    #[test]
    fn header_prefers_status_message() {
        let mut app = App::new(DemoConfig::default());
        let first = app.items[0].clone();
        app.set_selected_items(vec![first]);
        let row = title_row(&app);
        assert!(row.contains("1 item(s) selected"));
        assert!(!row.contains("Multi Dropdown Demo"));
    }
}
