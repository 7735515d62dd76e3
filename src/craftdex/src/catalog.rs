//! Catalog assembly
//!
//! The builder walks versions oldest to newest, parses every raw recipe of a
//! version and registers each item it meets the first time it is seen. The
//! accumulated recipes are merged across versions once, at the end.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

use crate::dedup::finalize;
use crate::lang::LanguageTable;
use crate::recipe::{parse_recipe_logged, Recipe};
use crate::reference::{category_for, Category};
use crate::tags::{expand_to_items, TagTable};
use crate::uses::UsesIndex;
use crate::version::Era;

/// One distinct game object across its lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    /// Taken from the first version's localization table that saw the item
    pub display_name: String,
    pub category: Category,
    /// Path token for the icon stage, `icons/<namespace>/<name>.png`
    pub icon_ref: String,
    pub version_added: String,
    /// Reserved for availability diffing; the builder never sets it
    pub version_removed: Option<String>,
    /// Legacy identifiers folded into this item by remapping
    pub aliases: Vec<String>,
}

/// Icon path token for an item id
pub fn icon_ref(item_id: &str) -> String {
    format!("icons/{}.png", item_id.replacen(':', "/", 1))
}

/// The consolidated output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Oldest to newest
    pub versions: Vec<String>,
    /// Discovery order
    pub items: Vec<Item>,
    pub recipes: Vec<Recipe>,
    pub uses: UsesIndex,
}

impl Catalog {
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Recipes producing `item_id`
    pub fn recipes_for<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes
            .iter()
            .filter(move |r| r.result.as_ref().is_some_and(|res| res.item == item_id))
    }

    /// Position of `version` in release order
    pub fn version_index(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|v| v == version)
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// One raw recipe file
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecipe {
    /// Namespaced recipe name derived from the file name
    pub id: String,
    pub data: Value,
}

/// Everything the builder needs from one version
#[derive(Debug, Clone, PartialEq)]
pub struct VersionAssets {
    pub era: Era,
    pub lang: LanguageTable,
    pub tags: TagTable,
    pub recipes: Vec<RawRecipe>,
}

impl VersionAssets {
    pub fn new(era: Era) -> Self {
        Self {
            era,
            lang: LanguageTable::new(),
            tags: TagTable::new(),
            recipes: Vec::new(),
        }
    }

    /// Empty assets with the era classified from the version string
    pub fn for_version(version: &str) -> Self {
        Self::new(Era::of(version))
    }

    pub fn with_recipe(mut self, id: impl Into<String>, data: Value) -> Self {
        self.recipes.push(RawRecipe {
            id: id.into(),
            data,
        });
        self
    }
}

/// Supplier of per-version assets
pub trait AssetSource {
    /// Assets for `version`, or `None` when nothing was extracted for it
    fn load_version(&self, version: &str) -> Option<VersionAssets>;
}

impl AssetSource for HashMap<String, VersionAssets> {
    fn load_version(&self, version: &str) -> Option<VersionAssets> {
        self.get(version).cloned()
    }
}

impl AssetSource for BTreeMap<String, VersionAssets> {
    fn load_version(&self, version: &str) -> Option<VersionAssets> {
        self.get(version).cloned()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Run state for one pipeline invocation
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    versions: Vec<String>,
    /// Keyed by id, in discovery order
    items: IndexMap<String, Item>,
    recipes: Vec<Recipe>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a version that has no assets. It still appears in the
    /// catalog's version list.
    pub fn skip_version(&mut self, version: &str) {
        self.versions.push(version.to_string());
    }

    /// Parse and register every recipe of one version.
    pub fn add_version(&mut self, version: &str, assets: &VersionAssets) {
        self.versions.push(version.to_string());
        let items_before = self.items.len();

        for raw in &assets.recipes {
            let parsed = parse_recipe_logged(&raw.data, &raw.id, version, assets.era);
            let recipe = parsed.recipe;

            if let Some(result) = &recipe.result {
                self.register(&result.item, version, &assets.lang);
            }
            for (_, ingredient) in recipe.slots() {
                for item_id in expand_to_items(ingredient, &assets.tags) {
                    self.register(&item_id, version, &assets.lang);
                }
            }
            for remap in parsed.remaps {
                if let Some(legacy) = remap.legacy {
                    self.add_alias(&remap.id, legacy);
                }
            }

            self.recipes.push(recipe);
        }

        debug!(
            version,
            era = %assets.era,
            recipes = assets.recipes.len(),
            new_items = self.items.len() - items_before,
            "processed version"
        );
    }

    fn register(&mut self, item_id: &str, version: &str, lang: &LanguageTable) {
        self.items
            .entry(item_id.to_string())
            .or_insert_with(|| Item {
                id: item_id.to_string(),
                display_name: lang.display_name(item_id),
                category: category_for(item_id),
                icon_ref: icon_ref(item_id),
                version_added: version.to_string(),
                version_removed: None,
                aliases: Vec::new(),
            });
    }

    fn add_alias(&mut self, item_id: &str, legacy: String) {
        let Some(item) = self.items.get_mut(item_id) else {
            return;
        };
        let aliases = &mut item.aliases;
        if !aliases.contains(&legacy) {
            aliases.push(legacy);
        }
    }

    /// Number of recipes accumulated so far, before merging
    pub fn raw_recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Merge recipes across versions and derive the uses index.
    pub fn finish(self) -> Catalog {
        let raw_count = self.recipes.len();
        let (recipes, uses) = finalize(&self.recipes);

        info!(
            items = self.items.len(),
            raw_recipes = raw_count,
            recipes = recipes.len(),
            uses = uses.len(),
            "catalog finalized"
        );

        Catalog {
            versions: self.versions,
            items: self.items.into_values().collect(),
            recipes,
            uses,
        }
    }
}

/// Build a catalog from `versions`, processed in the given order.
///
/// Versions the source has nothing for are warned about and skipped.
pub fn build<S: AssetSource + ?Sized>(versions: &[String], source: &S) -> Catalog {
    let mut builder = CatalogBuilder::new();

    for version in versions {
        match source.load_version(version) {
            Some(assets) => builder.add_version(version, &assets),
            None => {
                warn!(version = %version, "no extracted data for version, skipping");
                builder.skip_version(version);
            }
        }
    }

    builder.finish()
}
