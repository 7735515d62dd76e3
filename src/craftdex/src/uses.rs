//! Reverse "used in" index
//!
//! Maps an ingredient item to the result items of recipes it feeds. Keys keep
//! insertion order so that a written catalog diffs cleanly between runs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::recipe::{Recipe, Slot};
use crate::tags::{expand_to_items, TagTable};

/// Ingredient item -> distinct result items, both in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsesIndex(IndexMap<String, Vec<String>>);

impl UsesIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results `ingredient` is used to make. An ingredient that only feeds
    /// recipes without a result has an empty entry.
    pub fn get(&self, ingredient: &str) -> Option<&[String]> {
        self.0.get(ingredient).map(Vec::as_slice)
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.0.contains_key(ingredient)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Ensure `ingredient` has an entry; add `result` to it when given.
    pub fn record(&mut self, ingredient: &str, result: Option<&str>) {
        let results = self.0.entry(ingredient.to_string()).or_default();
        if let Some(result) = result {
            if !results.iter().any(|r| r == result) {
                results.push(result.to_string());
            }
        }
    }

    /// Index one recipe.
    ///
    /// Tags are not expanded here, so tag ingredients contribute nothing.
    /// The smithing template slot is not an ingredient for this purpose.
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        let no_tags = TagTable::new();
        let result = recipe.result.as_ref().map(|r| r.item.as_str());

        for (slot, ingredient) in recipe.slots() {
            if slot == Slot::Template {
                continue;
            }
            for item in expand_to_items(ingredient, &no_tags) {
                self.record(&item, result);
            }
        }
    }
}

impl FromIterator<(String, Vec<String>)> for UsesIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut index = UsesIndex::new();
        for (ingredient, results) in iter {
            index.record(&ingredient, None);
            for result in results {
                index.record(&ingredient, Some(&result));
            }
        }
        index
    }
}
