use super::item::{DropdownItem, filter_indices};
use crate::tui::utils::Input;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

pub const DEFAULT_PLACEHOLDER: &str = "Select Items";

/// Container-level presentation overrides. Never affects behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerStyle {
    /// Maximum width of the whole widget, in columns
    pub max_width: Option<u16>,
    /// Base style applied to the container area
    pub style: Style,
}

/// Configuration record of a dropdown.
///
/// The caller owns `items` and `selected_items`; the widget only reads them and
/// reports a full replacement selection through `on_change`.
pub struct MultiDropdownProps<'a, T> {
    pub items: &'a [DropdownItem<T>],
    pub selected_items: &'a [DropdownItem<T>],
    pub on_change: Option<Box<dyn FnMut(Vec<DropdownItem<T>>) + 'a>>,
    pub placeholder: &'a str,
    pub container_style: ContainerStyle,
}

impl<'a, T> MultiDropdownProps<'a, T> {
    pub fn new(items: &'a [DropdownItem<T>], selected_items: &'a [DropdownItem<T>]) -> Self {
        Self {
            items,
            selected_items,
            on_change: None,
            placeholder: DEFAULT_PLACEHOLDER,
            container_style: ContainerStyle::default(),
        }
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Vec<DropdownItem<T>>) + 'a,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn container_style(mut self, container_style: ContainerStyle) -> Self {
        self.container_style = container_style;
        self
    }

    /// Deliver a new selection to the caller, if it registered a callback
    pub(crate) fn emit(&mut self, selection: Vec<DropdownItem<T>>) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(selection);
        }
    }
}

/// Observable phase of the transient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownPhase {
    Closed,
    OpenBrowsing,
    OpenSearching,
}

/// What a click landed on, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Remove affordance of the chip at this index of `selected_items`
    ChipRemove(usize),
    SearchInput,
    /// Placeholder text or chip row
    Trigger,
    /// Anywhere else on the collapsed control
    Control,
    /// List row for the item at this index of `items`
    Row(usize),
}

/// Screen areas recorded by the last render.
#[derive(Debug, Default, Clone)]
pub struct HitRegions {
    pub control: Option<Rect>,
    pub search: Option<Rect>,
    pub trigger: Option<Rect>,
    pub chip_removes: Vec<(Rect, usize)>,
    pub rows: Vec<(Rect, usize)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        let inside = |rect: &Option<Rect>| rect.is_some_and(|r| r.contains(pos));

        if let Some((_, index)) = self.chip_removes.iter().find(|(r, _)| r.contains(pos)) {
            return Some(HitTarget::ChipRemove(*index));
        }
        if inside(&self.search) {
            return Some(HitTarget::SearchInput);
        }
        if inside(&self.trigger) {
            return Some(HitTarget::Trigger);
        }
        if inside(&self.control) {
            return Some(HitTarget::Control);
        }
        self.rows
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|(_, index)| HitTarget::Row(*index))
    }
}

/// Memo of the filtered index list, keyed on the item titles and the query.
///
/// Titles are the only item data the filter reads, so comparing them catches
/// a rebuilt pool even when it reuses the previous allocation.
#[derive(Debug, Default)]
pub struct FilterCache {
    titles: Vec<String>,
    search: Option<String>,
    indices: Vec<usize>,
    computations: u64,
}

impl FilterCache {
    pub fn indices<T>(&mut self, items: &[DropdownItem<T>], search: &str) -> &[usize] {
        let fresh = self.search.as_deref() == Some(search)
            && self.titles.len() == items.len()
            && self
                .titles
                .iter()
                .zip(items)
                .all(|(title, item)| *title == item.title);

        if !fresh {
            self.indices = filter_indices(items, search);
            self.titles = items.iter().map(|item| item.title.clone()).collect();
            self.search = Some(search.to_string());
            self.computations += 1;
        }
        &self.indices
    }

    /// Number of times the filter has actually run
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

/// Transient state of one dropdown instance.
#[derive(Debug, Default)]
pub struct MultiDropdownComponent {
    is_open: bool,
    is_search_focused: bool,
    search_input: Input,
    filter_cache: FilterCache,
    regions: HitRegions,
}

impl MultiDropdownComponent {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_search_focused(&self) -> bool {
        self.is_search_focused
    }

    pub fn search_text(&self) -> &str {
        self.search_input.text()
    }

    pub fn phase(&self) -> DropdownPhase {
        match (self.is_open, self.is_search_focused) {
            (false, _) => DropdownPhase::Closed,
            (true, false) => DropdownPhase::OpenBrowsing,
            (true, true) => DropdownPhase::OpenSearching,
        }
    }

    /// Flip the list open or closed, unless the search field holds focus.
    ///
    /// The guard keeps a click on the search field from collapsing the list
    /// while the user is typing.
    pub fn toggle_open(&mut self) {
        if self.is_search_focused {
            return;
        }
        self.is_open = !self.is_open;
    }

    /// Focus the search field and force the list open
    pub fn show_search(&mut self) {
        self.is_search_focused = true;
        self.is_open = true;
    }

    /// Drop search focus; the list stays as it is
    pub fn hide_search(&mut self) {
        self.is_search_focused = false;
    }

    pub fn search_input(&self) -> &Input {
        &self.search_input
    }

    pub fn search_input_mut(&mut self) -> &mut Input {
        &mut self.search_input
    }

    /// Items visible in the expanded list, paired with their index in `items`
    pub fn filtered_items<'i, T>(
        &mut self,
        items: &'i [DropdownItem<T>],
    ) -> Vec<(usize, &'i DropdownItem<T>)> {
        self.filter_cache
            .indices(items, self.search_input.text())
            .iter()
            .map(|&i| (i, &items[i]))
            .collect()
    }

    pub fn filter_cache(&self) -> &FilterCache {
        &self.filter_cache
    }

    pub fn regions(&self) -> &HitRegions {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut HitRegions {
        &mut self.regions
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions.hit_test(column, row)
    }
}
