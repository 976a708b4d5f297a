use super::*;
use proptest::prelude::*;

/// Pools with unique values, as the widget expects from its callers.
fn pool_strategy() -> impl Strategy<Value = Vec<DropdownItem<usize>>> {
    prop::collection::vec("[a-zA-Z ]{0,8}", 0..12).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(value, title)| DropdownItem::new(title, value))
            .collect()
    })
}

fn search_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,3}"
}

proptest! {
    /// The filtered list is exactly the subsequence whose lowercase title contains the query
    #[test]
    fn prop_filter_is_lowercase_substring_subsequence(
        items in pool_strategy(),
        search in search_strategy()
    ) {
        let filtered = filter_items(&items, &search);
        let expected: Vec<&DropdownItem<usize>> = items
            .iter()
            .filter(|i| i.title.to_lowercase().contains(&search.to_lowercase()))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    /// Filtering with an empty query is the identity
    #[test]
    fn prop_empty_filter_is_identity(items in pool_strategy()) {
        let filtered: Vec<DropdownItem<usize>> =
            filter_items(&items, "").into_iter().cloned().collect();
        prop_assert_eq!(filtered, items);
    }

    /// Toggling a non-member appends it once; toggling again restores the original
    #[test]
    fn prop_double_toggle_round_trips(
        items in pool_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        target in any::<prop::sample::Index>()
    ) {
        prop_assume!(!items.is_empty());

        let mut selected: Vec<DropdownItem<usize>> = Vec::new();
        for pick in picks {
            let item = &items[pick.index(items.len())];
            if !is_selected(&selected, item) {
                selected.push(item.clone());
            }
        }

        let item = &items[target.index(items.len())];
        prop_assume!(!is_selected(&selected, item));

        let once = toggle_selection(&selected, item);
        prop_assert_eq!(once.len(), selected.len() + 1);
        prop_assert_eq!(&once[..selected.len()], &selected[..]);
        prop_assert_eq!(once.last(), Some(item));

        let twice = toggle_selection(&once, item);
        prop_assert_eq!(twice, selected);
    }
}
