use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::tui::components::item::DropdownItem;
use crate::tui::components::multi_dropdown::DEFAULT_PLACEHOLDER;

// One selectable entry as written in the config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub value: i64,
}

impl From<ItemConfig> for DropdownItem<i64> {
    fn from(config: ItemConfig) -> Self {
        let mut item = DropdownItem::new(config.title, config.value);
        item.subtitle = config.subtitle;
        item.prefix = config.prefix.map(Into::into);
        item.suffix = config.suffix.map(Into::into);
        item
    }
}

// Settings for the demo host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_max_width", skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u16>,
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_max_width() -> Option<u16> {
    Some(30)
}

fn default_items() -> Vec<ItemConfig> {
    (1..=3)
        .zip(["One", "Two", "Three"])
        .map(|(value, title)| ItemConfig {
            title: title.to_string(),
            subtitle: Some(format!("Subtitle {value}")),
            prefix: Some("◆".to_string()),
            suffix: None,
            value,
        })
        .collect()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            max_width: default_max_width(),
            items: default_items(),
        }
    }
}

impl DemoConfig {
    /// Reject pools where two items share a value
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.value) {
                return Err(AppError::DuplicateValue(item.value));
            }
        }
        Ok(())
    }

    pub fn dropdown_items(&self) -> Vec<DropdownItem<i64>> {
        self.items.iter().cloned().map(Into::into).collect()
    }
}
