//! Item tags and tag expansion
//!
//! A tag is a named, version-scoped list of items usable wherever an
//! ingredient is expected. Legacy releases have no tags at all, so their
//! table is always empty.
//!
//! Members are taken as already-flat item lists: a member that is itself a
//! `#tag` reference is kept verbatim and never resolved further.

use std::collections::{HashMap, HashSet};

use crate::ingredient::Ingredient;

/// Tag name -> member items for one version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    tags: HashMap<String, Vec<String>>,
}

/// Tag names are stored without the `#` sigil so that both the `{"tag":
/// "ns:name"}` and the `"#ns:name"` ingredient forms find the same entry.
fn tag_key(tag: &str) -> &str {
    tag.strip_prefix('#').unwrap_or(tag)
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str, members: Vec<String>) {
        self.tags.insert(tag_key(tag).to_string(), members);
    }

    /// Members of `tag`, with or without a leading `#`
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.tags.get(tag_key(tag)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for TagTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut table = TagTable::new();
        for (tag, members) in iter {
            let tag: String = tag.into();
            table.insert(&tag, members);
        }
        table
    }
}

/// Concrete items an ingredient slot can be filled with.
///
/// Deduplicated in first-occurrence order. Unknown tags expand to nothing.
pub fn expand_to_items(ingredient: Option<&Ingredient>, tags: &TagTable) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();
    collect(ingredient, tags, &mut seen, &mut items);
    items
}

fn collect(
    ingredient: Option<&Ingredient>,
    tags: &TagTable,
    seen: &mut HashSet<String>,
    items: &mut Vec<String>,
) {
    match ingredient {
        None => {}
        Some(Ingredient::Single { item }) => push_unique(item, seen, items),
        Some(Ingredient::Tag { tag }) => {
            for member in tags.get(tag).unwrap_or_default() {
                push_unique(member, seen, items);
            }
        }
        Some(Ingredient::Alternatives { alternatives }) => {
            for alt in alternatives {
                collect(alt.as_ref(), tags, seen, items);
            }
        }
    }
}

fn push_unique(id: &str, seen: &mut HashSet<String>, items: &mut Vec<String>) {
    if seen.insert(id.to_string()) {
        items.push(id.to_string());
    }
}
