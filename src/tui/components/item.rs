use ratatui::text::Line;

/// One candidate entry of a dropdown.
///
/// `value` is the identity key: two items are the same selection entry when
/// their values compare equal, regardless of title or decorations.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownItem<T> {
    pub title: String,
    pub subtitle: Option<String>,
    pub prefix: Option<Line<'static>>,
    pub suffix: Option<Line<'static>>,
    pub value: T,
}

impl<T> DropdownItem<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            prefix: None,
            suffix: None,
            value,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<Line<'static>>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<Line<'static>>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Whether `item` is a member of `selected`, compared by value.
pub fn is_selected<T: PartialEq>(selected: &[DropdownItem<T>], item: &DropdownItem<T>) -> bool {
    selected.iter().any(|s| s.value == item.value)
}

/// Build the selection that results from toggling `item`.
///
/// Members are removed (every entry with an equal value), non-members are
/// appended. The input slice is never modified.
pub fn toggle_selection<T: Clone + PartialEq>(
    selected: &[DropdownItem<T>],
    item: &DropdownItem<T>,
) -> Vec<DropdownItem<T>> {
    if is_selected(selected, item) {
        selected
            .iter()
            .filter(|s| s.value != item.value)
            .cloned()
            .collect()
    } else {
        let mut next = selected.to_vec();
        next.push(item.clone());
        next
    }
}

/// Indices of the items whose title contains `search` (case-insensitive).
pub fn filter_indices<T>(items: &[DropdownItem<T>], search: &str) -> Vec<usize> {
    if search.is_empty() {
        return (0..items.len()).collect();
    }

    let query = search.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.title.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

/// Items whose title contains `search` (case-insensitive), in pool order.
pub fn filter_items<'a, T>(items: &'a [DropdownItem<T>], search: &str) -> Vec<&'a DropdownItem<T>> {
    filter_indices(items, search)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}


#[cfg(test)]
#[path = "item_proptests.rs"]
mod proptests;
