use crate::tui::components::item::DropdownItem;
use colored::*;

/// Render items as a tree, one branch per item with its subtitle beneath
pub fn item_tree_lines(items: &[&DropdownItem<i64>]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut items_iter = items.iter().peekable();
    while let Some(item) = items_iter.next() {
        let is_last_item = items_iter.peek().is_none();
        let branch_prefix = if is_last_item { "└──" } else { "├──" };

        let mut entry = format!("{branch_prefix} ");
        if let Some(prefix) = &item.prefix {
            entry.push_str(&format!("{prefix} "));
        }
        entry.push_str(&format!("{}", item.title.cyan()));
        if let Some(suffix) = &item.suffix {
            entry.push_str(&format!(" {suffix}"));
        }
        entry.push_str(&format!(" {}", format!("= {}", item.value).truecolor(180, 180, 180)));
        lines.push(entry);

        if let Some(subtitle) = &item.subtitle {
            let indent = if is_last_item { "    " } else { "│   " };
            lines.push(format!("{indent}{}", subtitle.dimmed()));
        }
    }
    lines
}

pub fn display_items(items: &[&DropdownItem<i64>]) {
    eprintln!("{}", "Items:".yellow());
    for line in item_tree_lines(items) {
        eprintln!("{line}");
    }
}

pub fn show_success(message: &str) {
    eprintln!("{}", format!("✔ {message}").green());
}

pub fn show_info(message: &str) {
    eprintln!("{}", format!("ℹ {message}").blue());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_lines_show_branches_and_subtitles() {
        colored::control::set_override(false);
        let one = DropdownItem::new("One", 1).subtitle("Subtitle 1").prefix("◆");
        let two = DropdownItem::new("Two", 2);

        let lines = item_tree_lines(&[&one, &two]);
        assert_eq!(
            lines,
            vec![
                "├── ◆ One = 1".to_string(),
                "│   Subtitle 1".to_string(),
                "└── Two = 2".to_string(),
            ]
        );
    }
}
