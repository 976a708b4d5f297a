use crate::tui::{
    components::{
        item::{DropdownItem, is_selected},
        multi_dropdown::{MultiDropdownComponent, MultiDropdownProps},
    },
    theme::Theme,
    utils::{constrain_width, input_to_line},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const CHIP_GAP: u16 = 1;
const CHEVRON_WIDTH: u16 = 2;
const CHECKBOX_WIDTH: u16 = 4;

/// Where one chip lands inside the chip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChipPlacement {
    index: usize,
    x: u16,
    line: u16,
    width: u16,
}

fn chip_width(title: &str) -> u16 {
    // " title × "
    (UnicodeWidthStr::width(title) as u16).saturating_add(4)
}

/// Wrap chips left to right, starting a new line when the next one does not fit
fn layout_chips<T>(selected: &[DropdownItem<T>], max_width: u16) -> (Vec<ChipPlacement>, u16) {
    let mut placements = Vec::with_capacity(selected.len());
    let mut x = 0u16;
    let mut line = 0u16;

    for (index, item) in selected.iter().enumerate() {
        let width = chip_width(&item.title);
        if x > 0 && x.saturating_add(width) > max_width {
            x = 0;
            line += 1;
        }
        placements.push(ChipPlacement {
            index,
            x,
            line,
            width,
        });
        x = x.saturating_add(width).saturating_add(CHIP_GAP);
    }

    (placements, line + 1)
}

pub fn render<T: PartialEq>(
    frame: &mut Frame<'_>,
    area: Rect,
    props: &MultiDropdownProps<'_, T>,
    component: &mut MultiDropdownComponent,
) {
    let theme = Theme::new();
    component.regions_mut().clear();

    let area = constrain_width(area, props.container_style.max_width);
    if area.width < 6 || area.height < 3 {
        return;
    }
    frame.render_widget(Block::default().style(props.container_style.style), area);

    let content_width = area.width.saturating_sub(2 + CHEVRON_WIDTH);
    let show_chips = !component.is_search_focused() && !props.selected_items.is_empty();
    let (chips, chip_lines) = if show_chips {
        layout_chips(props.selected_items, content_width)
    } else {
        (Vec::new(), 1)
    };

    let control_height = chip_lines.saturating_add(2).min(area.height);
    let control_area = Rect {
        height: control_height,
        ..area
    };

    let control_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if component.is_open() {
            theme.block_active()
        } else {
            theme.block_inactive()
        });
    let inner = control_block.inner(control_area);
    frame.render_widget(control_block, control_area);
    component.regions_mut().control = Some(control_area);

    let content_area = Rect {
        width: content_width.min(inner.width),
        ..inner
    };

    if component.is_search_focused() {
        render_search(frame, content_area, props.placeholder, component, &theme);
    } else if props.selected_items.is_empty() {
        let width = (UnicodeWidthStr::width(props.placeholder) as u16).min(content_area.width);
        let placeholder_area = Rect {
            width,
            height: 1,
            ..content_area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(props.placeholder.to_string(), theme.placeholder())),
            placeholder_area,
        );
        component.regions_mut().trigger = Some(placeholder_area);
    } else {
        render_chips(frame, content_area, props.selected_items, &chips, component, &theme);
    }

    let chevron = if component.is_open() { "▲" } else { "▼" };
    let chevron_area = Rect {
        x: inner.right().saturating_sub(1),
        y: inner.y,
        width: 1,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(chevron, theme.chevron())),
        chevron_area,
    );

    if component.is_open() {
        let list_area = Rect {
            y: control_area.bottom(),
            height: area.height - control_height,
            ..area
        };
        render_list(frame, list_area, props, component, &theme);
    }
}

fn render_search(
    frame: &mut Frame<'_>,
    area: Rect,
    placeholder: &str,
    component: &mut MultiDropdownComponent,
    theme: &Theme,
) {
    let search_area = Rect { height: 1, ..area };
    let input = component.search_input();

    let line = if input.text().is_empty() {
        Line::from(vec![
            Span::styled(" ", theme.input_cursor()),
            Span::styled(placeholder.to_string(), theme.placeholder()),
        ])
    } else {
        input_to_line(input, theme)
    };

    let cursor_display_pos = input.cursor_display_width() as u16;
    let scroll_offset = if cursor_display_pos >= search_area.width {
        cursor_display_pos - search_area.width + 1
    } else {
        0
    };

    frame.render_widget(
        Paragraph::new(line)
            .style(theme.text_normal())
            .scroll((0, scroll_offset)),
        search_area,
    );
    component.regions_mut().search = Some(search_area);
}

fn render_chips<T>(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: &[DropdownItem<T>],
    chips: &[ChipPlacement],
    component: &mut MultiDropdownComponent,
    theme: &Theme,
) {
    let regions = component.regions_mut();
    regions.trigger = Some(area);

    for chip in chips {
        let y = area.y + chip.line;
        let x = area.x + chip.x;
        if y >= area.bottom() || x >= area.right() {
            continue;
        }

        let title = &selected[chip.index].title;
        let chip_area = Rect {
            x,
            y,
            width: chip.width.min(area.right() - x),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {title} "), theme.chip()),
                Span::styled("×", theme.chip_remove()),
                Span::styled(" ", theme.chip()),
            ])),
            chip_area,
        );

        let remove_x = x.saturating_add(chip.width - 2);
        if remove_x < chip_area.right() {
            regions
                .chip_removes
                .push((Rect::new(remove_x, y, 1, 1), chip.index));
        }
    }
}

fn item_line<T: PartialEq>(item: &DropdownItem<T>, checked: bool, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![if checked {
        Span::styled("[x] ", theme.checkbox_checked())
    } else {
        Span::styled("[ ] ", theme.checkbox_unchecked())
    }];

    if let Some(prefix) = &item.prefix {
        spans.extend(prefix.spans.iter().cloned());
        spans.push(Span::raw(" "));
    }

    let title_style = if checked {
        theme.text_highlight()
    } else {
        theme.text_normal()
    };
    spans.push(Span::styled(item.title.clone(), title_style));

    if let Some(suffix) = &item.suffix {
        spans.push(Span::raw(" "));
        spans.extend(suffix.spans.iter().cloned());
    }

    Line::from(spans)
}

fn render_list<T: PartialEq>(
    frame: &mut Frame<'_>,
    area: Rect,
    props: &MultiDropdownProps<'_, T>,
    component: &mut MultiDropdownComponent,
    theme: &Theme,
) {
    let visible = component.filtered_items(props.items);

    let needed: u16 = if visible.is_empty() {
        1
    } else {
        visible
            .iter()
            .map(|(_, item)| if item.subtitle.is_some() { 2u16 } else { 1 })
            .fold(0u16, u16::saturating_add)
    };
    let list_area = Rect {
        height: needed.saturating_add(2).min(area.height),
        ..area
    };
    if list_area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.block_inactive());
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No matching items", theme.text_dim())),
            Rect { height: 1, ..inner },
        );
        return;
    }

    let mut y = inner.y;
    for (index, item) in visible {
        if y >= inner.bottom() {
            break;
        }

        let checked = is_selected(props.selected_items, item);
        let title_area = Rect {
            y,
            height: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new(item_line(item, checked, theme)), title_area);

        let mut row_area = title_area;
        if let Some(subtitle) = &item.subtitle
            && y + 1 < inner.bottom()
        {
            let subtitle_area = Rect {
                x: inner.x + CHECKBOX_WIDTH,
                y: y + 1,
                width: inner.width.saturating_sub(CHECKBOX_WIDTH),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(subtitle.clone(), theme.subtitle())),
                subtitle_area,
            );
            row_area.height = 2;
        }

        component.regions_mut().rows.push((row_area, index));
        y += row_area.height;
    }
}
