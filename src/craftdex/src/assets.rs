//! Extracted asset trees on disk
//!
//! Each version lives in its own directory under the extraction root. The
//! layout differs between eras:
//!
//! | Piece   | Legacy                            | Modern                                  |
//! |---------|-----------------------------------|-----------------------------------------|
//! | recipes | `assets/<ns>/recipes`             | `data/<ns>/recipes` or `data/<ns>/recipe` |
//! | tags    | none                              | `data/<ns>/tags/items` or `tags/item`   |
//! | lang    | `assets/<ns>/lang/en_US.lang`     | `assets/<ns>/lang/en_us.json`           |
//!
//! Missing pieces are warned about and replaced with empty tables.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::catalog::{AssetSource, RawRecipe, VersionAssets};
use crate::files::{collect_files_with_extension, first_existing, resource_path, subdir_names};
use crate::ident::DEFAULT_NAMESPACE;
use crate::lang::LanguageTable;
use crate::tags::TagTable;
use crate::version::{sort_by_release, Era};
use crate::{Error, Result};

/// Reader for `<root>/<version>/...` trees
#[derive(Debug, Clone)]
pub struct ExtractedAssets {
    root: PathBuf,
    namespace: String,
}

impl ExtractedAssets {
    /// Open an extraction root. The root itself must exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::MissingRoot(root));
        }
        Ok(Self {
            root,
            namespace: DEFAULT_NAMESPACE.to_string(),
        })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Version directories present under the root, oldest first
    pub fn discover_versions(&self) -> Result<Vec<String>> {
        let mut versions = subdir_names(&self.root)?;
        sort_by_release(&mut versions);
        Ok(versions)
    }

    fn version_dir(&self, version: &str) -> PathBuf {
        self.root.join(version)
    }

    fn recipe_dirs(&self, dir: &Path, era: Era) -> Vec<PathBuf> {
        let ns = &self.namespace;
        match era {
            Era::Legacy => vec![dir.join("assets").join(ns).join("recipes")],
            Era::Modern => vec![
                dir.join("data").join(ns).join("recipes"),
                dir.join("data").join(ns).join("recipe"),
            ],
        }
    }

    fn tag_dirs(&self, dir: &Path) -> Vec<PathBuf> {
        let tags = dir.join("data").join(&self.namespace).join("tags");
        vec![tags.join("items"), tags.join("item")]
    }

    fn lang_files(&self, dir: &Path, era: Era) -> Vec<PathBuf> {
        let lang = dir.join("assets").join(&self.namespace).join("lang");
        match era {
            Era::Legacy => vec![lang.join("en_US.lang"), lang.join("en_us.lang")],
            Era::Modern => vec![lang.join("en_us.json")],
        }
    }

    /// Read every recipe file of one version, sorted by path
    pub fn load_recipes(&self, version: &str, era: Era) -> Vec<RawRecipe> {
        let dir = self.version_dir(version);
        let candidates = self.recipe_dirs(&dir, era);
        let Some(recipe_dir) = first_existing(&candidates) else {
            warn!(version, path = %candidates[0].display(), "no recipe directory");
            return Vec::new();
        };

        collect_files_with_extension(recipe_dir, "json")
            .into_iter()
            .filter_map(|(path, relative)| {
                let data = read_json(&path, version)?;
                Some(RawRecipe {
                    id: format!("{}:{}", self.namespace, resource_path(&relative)),
                    data,
                })
            })
            .collect()
    }

    /// Item tags of a modern version. Legacy versions have none.
    pub fn load_tags(&self, version: &str, era: Era) -> TagTable {
        let mut table = TagTable::new();
        if era.is_legacy() {
            return table;
        }

        let dir = self.version_dir(version);
        let candidates = self.tag_dirs(&dir);
        let Some(tag_dir) = first_existing(&candidates) else {
            warn!(version, path = %candidates[0].display(), "no item tag directory");
            return table;
        };

        for (path, relative) in collect_files_with_extension(tag_dir, "json") {
            let Some(data) = read_json(&path, version) else {
                continue;
            };
            let name = format!("{}:{}", self.namespace, resource_path(&relative));
            table.insert(&name, tag_members(&data));
        }
        table
    }

    /// Localization table of one version
    pub fn load_lang(&self, version: &str, era: Era) -> LanguageTable {
        let dir = self.version_dir(version);
        let candidates = self.lang_files(&dir, era);
        let Some(path) = first_existing(&candidates) else {
            warn!(version, path = %candidates[0].display(), "no localization file");
            return LanguageTable::new();
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(version, path = %path.display(), error = %e, "failed to read localization file");
                return LanguageTable::new();
            }
        };

        match era {
            Era::Legacy => LanguageTable::from_lang(&content),
            Era::Modern => match serde_json::from_str::<Value>(&content) {
                Ok(value) => LanguageTable::from_json(&value),
                Err(e) => {
                    warn!(version, path = %path.display(), error = %e, "invalid localization JSON");
                    LanguageTable::new()
                }
            },
        }
    }
}

impl AssetSource for ExtractedAssets {
    fn load_version(&self, version: &str) -> Option<VersionAssets> {
        if !self.version_dir(version).is_dir() {
            return None;
        }

        let era = Era::of(version);
        let assets = VersionAssets {
            era,
            lang: self.load_lang(version, era),
            tags: self.load_tags(version, era),
            recipes: self.load_recipes(version, era),
        };
        debug!(
            version,
            %era,
            recipes = assets.recipes.len(),
            tags = assets.tags.len(),
            lang_entries = assets.lang.len(),
            "loaded version assets"
        );
        Some(assets)
    }
}

/// Members listed in a tag file's `values`, as plain ids or `{"id": ...}`
fn tag_members(data: &Value) -> Vec<String> {
    data.get("values")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj.get("id").and_then(Value::as_str).map(str::to_string),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn read_json(path: &Path, version: &str) -> Option<Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(version, path = %path.display(), error = %e, "failed to read file, skipping");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(version, path = %path.display(), error = %e, "invalid JSON, skipping");
            None
        }
    }
}
