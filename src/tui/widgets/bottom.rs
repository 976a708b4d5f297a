use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
};

use crate::tui::{app::App, theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let version_info = Text::from(vec![Line::raw(format!(
        "mdd {}",
        env!("CARGO_PKG_VERSION")
    ))])
    .right_aligned();

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
    frame.render_widget(help_text(app), rows[0]);
    frame.render_widget(selection_summary(app), rows[1]);
    frame.render_widget(version_info, rows[0]);
}

fn help_text(app: &App) -> Text<'static> {
    let help = if app.dropdown.is_search_focused() {
        vec![
            Span::raw("Type: Filter"),
            Span::raw("  Esc/Enter: Stop Searching"),
            Span::raw("  Click Row: Toggle"),
            Span::raw("  ^C: Quit"),
        ]
    } else {
        vec![
            Span::raw("Click Box: Open/Close"),
            Span::raw("  Click Text: Search"),
            Span::raw("  ×: Remove"),
            Span::raw("  Q/Esc: Quit"),
        ]
    };

    Text::from(Line::from(help))
        .left_aligned()
        .style(Theme::new().text_dim())
}

fn selection_summary(app: &App) -> Line<'static> {
    if app.selected_items.is_empty() {
        return Line::styled("Selected: none", Theme::new().text_dim());
    }

    let titles: Vec<&str> = app
        .selected_items
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    Line::from(vec![
        Span::styled("Selected: ", Theme::new().text_dim()),
        Span::styled(titles.join(", "), Theme::new().text_highlight()),
    ])
}
