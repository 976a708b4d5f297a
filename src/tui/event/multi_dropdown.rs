use crate::tui::components::{
    item::toggle_selection,
    multi_dropdown::{HitTarget, MultiDropdownComponent, MultiDropdownProps},
};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

/// Whether the dropdown used an event or left it for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownOutcome {
    Consumed,
    Ignored,
}

pub fn handle<T: Clone + PartialEq>(
    component: &mut MultiDropdownComponent,
    props: &mut MultiDropdownProps<'_, T>,
    event: &Event,
) -> DropdownOutcome {
    match event {
        Event::Mouse(mouse) => handle_mouse(component, props, *mouse),
        Event::Key(key) => handle_key(component, *key),
        _ => DropdownOutcome::Ignored,
    }
}

/// Resolve a left click against the regions recorded by the last render.
pub fn handle_mouse<T: Clone + PartialEq>(
    component: &mut MultiDropdownComponent,
    props: &mut MultiDropdownProps<'_, T>,
    mouse: MouseEvent,
) -> DropdownOutcome {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return DropdownOutcome::Ignored;
    }

    let target = component.hit_test(mouse.column, mouse.row);
    debug!(?target, phase = ?component.phase(), "dropdown click");

    match target {
        Some(HitTarget::ChipRemove(index)) => {
            if let Some(item) = props.selected_items.get(index) {
                let next = toggle_selection(props.selected_items, item);
                props.emit(next);
            }
        }
        // The search field sits inside the control, so a click on it is a
        // control click that the focus guard swallows.
        Some(HitTarget::SearchInput | HitTarget::Control) => component.toggle_open(),
        Some(HitTarget::Trigger) => component.show_search(),
        Some(HitTarget::Row(index)) => {
            component.hide_search();
            if let Some(item) = props.items.get(index) {
                let next = toggle_selection(props.selected_items, item);
                props.emit(next);
            }
        }
        None if component.is_search_focused() => component.hide_search(),
        None => return DropdownOutcome::Ignored,
    }

    DropdownOutcome::Consumed
}

/// Edit the search text while the search field has focus.
pub fn handle_key(component: &mut MultiDropdownComponent, key: KeyEvent) -> DropdownOutcome {
    if key.kind == KeyEventKind::Release || !component.is_search_focused() {
        return DropdownOutcome::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return DropdownOutcome::Ignored;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
        component.hide_search();
        return DropdownOutcome::Consumed;
    }

    let input = component.search_input_mut();
    match key.code {
        KeyCode::Char(c) => input.enter_char(c),
        KeyCode::Backspace => input.delete_char(),
        KeyCode::Delete => input.delete_char_forward(),
        KeyCode::Left => input.move_cursor_left(),
        KeyCode::Right => input.move_cursor_right(),
        KeyCode::Home => input.move_cursor_home(),
        KeyCode::End => input.move_cursor_end(),
        _ => return DropdownOutcome::Ignored,
    }

    DropdownOutcome::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::item::DropdownItem;
    use crate::tui::components::multi_dropdown::DropdownPhase;
    use crate::tui::widgets::multi_dropdown::render;
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    fn numbers() -> Vec<DropdownItem<i64>> {
        vec![
            DropdownItem::new("One", 1),
            DropdownItem::new("Two", 2),
            DropdownItem::new("Three", 3),
        ]
    }

    fn draw(
        items: &[DropdownItem<i64>],
        selected: &[DropdownItem<i64>],
        component: &mut MultiDropdownComponent,
    ) {
        let props = MultiDropdownProps::new(items, selected);
        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &props, component)
            })
            .unwrap();
    }

    fn click(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click_rect(rect: Rect) -> Event {
        click(rect.x, rect.y)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Dispatch an event and return what the callback received, if anything
    fn dispatch(
        component: &mut MultiDropdownComponent,
        items: &[DropdownItem<i64>],
        selected: &[DropdownItem<i64>],
        event: &Event,
    ) -> (DropdownOutcome, Option<Vec<DropdownItem<i64>>>) {
        let mut received = None;
        let outcome = {
            let mut props =
                MultiDropdownProps::new(items, selected).on_change(|s| received = Some(s));
            handle(component, &mut props, event)
        };
        (outcome, received)
    }

    fn row_for(component: &MultiDropdownComponent, index: usize) -> Rect {
        component
            .regions()
            .rows
            .iter()
            .find(|(_, i)| *i == index)
            .map(|(r, _)| *r)
            .unwrap()
    }

    #[test]
    fn control_click_toggles_list() {
        let items = numbers();
        let mut component = MultiDropdownComponent::new();
        draw(&items, &[], &mut component);

        // right border of the control, away from the placeholder text
        let control = component.regions().control.unwrap();
        let edge = click(control.right() - 1, control.y + 1);

        let (outcome, received) = dispatch(&mut component, &items, &[], &edge);
        assert_eq!(outcome, DropdownOutcome::Consumed);
        assert!(received.is_none());
        assert_eq!(component.phase(), DropdownPhase::OpenBrowsing);

        draw(&items, &[], &mut component);
        dispatch(&mut component, &items, &[], &edge);
        assert_eq!(component.phase(), DropdownPhase::Closed);
    }

    #[test]
    fn placeholder_click_enters_search_mode_from_any_state() {
        let items = numbers();
        for start_open in [false, true] {
            let mut component = MultiDropdownComponent::new();
            if start_open {
                component.toggle_open();
            }
            draw(&items, &[], &mut component);

            let trigger = component.regions().trigger.unwrap();
            dispatch(&mut component, &items, &[], &click_rect(trigger));
            assert!(component.is_open());
            assert!(component.is_search_focused());
        }
    }

    #[test]
    fn control_click_while_searching_is_swallowed() {
        let items = numbers();
        let mut component = MultiDropdownComponent::new();
        component.show_search();
        draw(&items, &[], &mut component);

        let control = component.regions().control.unwrap();
        let search = component.regions().search.unwrap();
        for event in [click(control.right() - 1, control.y), click_rect(search)] {
            let (outcome, _) = dispatch(&mut component, &items, &[], &event);
            assert_eq!(outcome, DropdownOutcome::Consumed);
            assert_eq!(component.phase(), DropdownPhase::OpenSearching);
        }
    }

    #[test]
    fn typing_filters_then_selecting_round_trips() {
        let items = numbers();
        let mut component = MultiDropdownComponent::new();
        draw(&items, &[], &mut component);

        let trigger = component.regions().trigger.unwrap();
        dispatch(&mut component, &items, &[], &click_rect(trigger));
        let (outcome, _) = dispatch(&mut component, &items, &[], &key(KeyCode::Char('t')));
        assert_eq!(outcome, DropdownOutcome::Consumed);

        let visible: Vec<String> = component
            .filtered_items(&items)
            .into_iter()
            .map(|(_, item)| item.title.clone())
            .collect();
        assert_eq!(visible, vec!["Two", "Three"]);

        draw(&items, &[], &mut component);
        let two = row_for(&component, 1);
        let (_, received) = dispatch(&mut component, &items, &[], &click_rect(two));
        let selection = received.unwrap();
        assert_eq!(selection, vec![DropdownItem::new("Two", 2)]);
        // clicking a row moves focus off the search field
        assert_eq!(component.phase(), DropdownPhase::OpenBrowsing);

        draw(&items, &selection, &mut component);
        let two = row_for(&component, 1);
        let (_, received) = dispatch(&mut component, &items, &selection, &click_rect(two));
        assert_eq!(received, Some(Vec::new()));
    }

    #[test]
    fn removing_chip_preserves_order() {
        let items = numbers();
        let selected = vec![items[0].clone(), items[1].clone()];
        let mut component = MultiDropdownComponent::new();
        draw(&items, &selected, &mut component);

        let (rect, index) = component.regions().chip_removes[0];
        assert_eq!(index, 0);
        let (_, received) = dispatch(&mut component, &items, &selected, &click_rect(rect));
        assert_eq!(received, Some(vec![items[1].clone()]));
        assert!(!component.is_search_focused());
    }

    #[test]
    fn chip_row_click_enters_search_mode() {
        let items = numbers();
        let selected = vec![items[0].clone()];
        let mut component = MultiDropdownComponent::new();
        draw(&items, &selected, &mut component);

        let trigger = component.regions().trigger.unwrap();
        // first cell of the chip label, left of its remove button
        let (_, received) = dispatch(&mut component, &items, &selected, &click_rect(trigger));
        assert!(received.is_none());
        assert_eq!(component.phase(), DropdownPhase::OpenSearching);
    }

    #[test]
    fn click_outside_blurs_search_but_keeps_list_open() {
        let items = numbers();
        let mut component = MultiDropdownComponent::new();
        component.show_search();
        draw(&items, &[], &mut component);

        let (outcome, _) = dispatch(&mut component, &items, &[], &click(29, 13));
        assert_eq!(outcome, DropdownOutcome::Consumed);
        assert_eq!(component.phase(), DropdownPhase::OpenBrowsing);

        let (outcome, _) = dispatch(&mut component, &items, &[], &click(29, 13));
        assert_eq!(outcome, DropdownOutcome::Ignored);
    }

    #[test]
    fn keys_are_ignored_unless_searching() {
        let mut component = MultiDropdownComponent::new();
        assert_eq!(
            handle_key(&mut component, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            DropdownOutcome::Ignored
        );
        assert_eq!(component.search_text(), "");
    }

    #[test]
    fn search_editing_keys() {
        let mut component = MultiDropdownComponent::new();
        component.show_search();
        for c in "twp".chars() {
            handle_key(&mut component, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        handle_key(&mut component, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        handle_key(&mut component, KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        assert_eq!(component.search_text(), "two");

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut component, ctrl_c), DropdownOutcome::Ignored);

        handle_key(&mut component, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(component.phase(), DropdownPhase::OpenBrowsing);
        assert_eq!(component.search_text(), "two");
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        let items = numbers();
        let mut component = MultiDropdownComponent::new();
        draw(&items, &[], &mut component);

        let control = component.regions().control.unwrap();
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: control.x,
            row: control.y,
            modifiers: KeyModifiers::NONE,
        });
        let (outcome, _) = dispatch(&mut component, &items, &[], &scroll);
        assert_eq!(outcome, DropdownOutcome::Ignored);
        assert_eq!(component.phase(), DropdownPhase::Closed);
    }

    #[test]
    fn missing_callback_still_updates_transient_state() {
        let items = numbers();
        let mut component = MultiDropdownComponent::new();
        component.toggle_open();
        draw(&items, &[], &mut component);

        let one = row_for(&component, 0);
        let mut props = MultiDropdownProps::new(&items, &[]);
        let outcome = handle(&mut component, &mut props, &click_rect(one));
        assert_eq!(outcome, DropdownOutcome::Consumed);
        assert!(component.is_open());
    }
}
