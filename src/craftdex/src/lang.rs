//! Localization tables and display names

use serde_json::Value;
use std::collections::HashMap;

use crate::ident::split_namespace;

/// Translation key -> localized string for one version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    entries: HashMap<String, String>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the legacy `key=value` format.
    ///
    /// Blank lines and `#` comments are skipped. Only the first `=` splits,
    /// so values may contain `=` themselves.
    pub fn from_lang(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                let (key, value) = (key.trim(), value.trim());
                (!key.is_empty() && !value.is_empty()).then(|| (key.to_string(), value.to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Build from a flat JSON object. Non-string values are ignored.
    pub fn from_json(value: &Value) -> Self {
        let entries = value
            .as_object()
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human-readable label for an item.
    ///
    /// Tries `item.<ns>.<name>`, `block.<ns>.<name>`, then the legacy
    /// `item.<name>.name` and `tile.<name>.name` keys, and finally
    /// synthesizes a title-cased label from the name.
    pub fn display_name(&self, item_id: &str) -> String {
        let (ns, name) = split_namespace(item_id);
        let keys = [
            format!("item.{}.{}", ns, name),
            format!("block.{}.{}", ns, name),
            format!("item.{}.name", name),
            format!("tile.{}.name", name),
        ];

        keys.iter()
            .find_map(|key| self.get(key))
            .map(str::to_string)
            .unwrap_or_else(|| title_case(name))
    }
}

/// `dark_oak_planks` -> `Dark Oak Planks`
pub fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
