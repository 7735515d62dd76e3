//! Compact catalog for embedding
//!
//! Rewrites a [`Catalog`] with short keys, folds long contiguous version
//! lists into a range string and inlines a handful of common icons as data
//! URIs, so the whole document can ship inside a web page.

use base64::prelude::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::ingredient::Ingredient;
use crate::recipe::{ItemStack, RecipeKind, RecipePayload};
use crate::uses::UsesIndex;
use crate::Result;

/// Minimum number of contiguous versions before a list becomes a range
pub const MIN_RANGE_LEN: usize = 4;

/// Separator between the ends of a version range
pub const RANGE_SEPARATOR: char = '–';

/// Items whose icons are inlined; the rest load lazily
pub const PRIORITY_ICONS: &[&str] = &[
    "oak_planks",
    "cobblestone",
    "stone",
    "iron_ingot",
    "gold_ingot",
    "diamond",
    "stick",
    "coal",
    "redstone",
    "crafting_table",
    "furnace",
    "chest",
    "torch",
    "oak_log",
    "dirt",
];

/// Packed file name
pub const PACKED_FILE: &str = "data.min.json";

/// Gzipped packed file name
pub const PACKED_GZ_FILE: &str = "data.min.json.gz";

/// Versions a recipe appears in, as a list or a `first–last` range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionSpan {
    Range(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedItem {
    pub id: String,
    /// Display name
    pub n: String,
    /// Category code
    pub c: char,
    /// Icon token, `namespace/name`
    pub ic: String,
    /// Index of the version the item was added in
    pub va: i64,
    /// Index of the removal version, -1 when still present
    pub vr: i64,
    /// Aliases
    pub a: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedRecipe {
    pub id: String,
    /// Kind code
    pub t: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs: Option<ItemStack>,
    pub v: VersionSpan,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Option<Ingredient>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<IndexMap<char, Option<Ingredient>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub g: Option<Vec<Vec<Option<Ingredient>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tm: Option<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gr: Option<String>,
}

impl PackedRecipe {
    fn new(id: String, kind: &RecipeKind, rs: Option<ItemStack>, v: VersionSpan) -> Self {
        Self {
            id,
            t: kind_code(kind),
            rs,
            v,
            ingredients: None,
            p: None,
            k: None,
            g: None,
            i: None,
            xp: None,
            ct: None,
            b: None,
            a: None,
            tm: None,
            gr: None,
        }
    }
}

/// The packed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedCatalog {
    pub v: Vec<String>,
    pub i: Vec<PackedItem>,
    pub r: Vec<PackedRecipe>,
    pub u: UsesIndex,
    /// `namespace/name` -> `data:image/png;base64,...`
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
}

/// Two-letter code for a recipe kind
pub fn kind_code(kind: &RecipeKind) -> String {
    match kind {
        RecipeKind::Shaped => "sd".to_string(),
        RecipeKind::Shapeless => "sl".to_string(),
        RecipeKind::Smelting => "sm".to_string(),
        RecipeKind::Blasting => "bl".to_string(),
        RecipeKind::Smoking => "sk".to_string(),
        RecipeKind::Campfire => "cf".to_string(),
        RecipeKind::Stonecutting => "sc".to_string(),
        RecipeKind::Smithing => "sh".to_string(),
        RecipeKind::SmithingTransform => "st".to_string(),
        RecipeKind::SmithingTrim => "tr".to_string(),
        RecipeKind::Other(name) => name.chars().take(2).collect(),
    }
}

/// Fold `versions` into a range when they are at least
/// [`MIN_RANGE_LEN`] consecutive entries of `all_versions`.
pub fn compress_version_ranges(versions: &[String], all_versions: &[String]) -> VersionSpan {
    if versions.len() < MIN_RANGE_LEN {
        return VersionSpan::List(versions.to_vec());
    }

    let positions: Option<Vec<usize>> = versions
        .iter()
        .map(|v| all_versions.iter().position(|a| a == v))
        .collect();

    let contiguous = positions
        .as_deref()
        .is_some_and(|p| p.windows(2).all(|w| w[1] == w[0] + 1));

    match (contiguous, versions.first(), versions.last()) {
        (true, Some(first), Some(last)) => {
            VersionSpan::Range(format!("{}{}{}", first, RANGE_SEPARATOR, last))
        }
        _ => VersionSpan::List(versions.to_vec()),
    }
}

fn version_index(catalog: &Catalog, version: Option<&str>) -> i64 {
    version
        .and_then(|v| catalog.version_index(v))
        .and_then(|idx| i64::try_from(idx).ok())
        .unwrap_or(-1)
}

/// Pack a catalog. `icons` is attached unchanged.
pub fn pack(catalog: &Catalog, icons: BTreeMap<String, String>) -> PackedCatalog {
    let items = catalog
        .items
        .iter()
        .map(|item| PackedItem {
            id: item.id.clone(),
            n: item.display_name.clone(),
            c: item.category.code(),
            ic: item
                .icon_ref
                .trim_start_matches("icons/")
                .trim_end_matches(".png")
                .to_string(),
            va: version_index(catalog, Some(&item.version_added)),
            vr: version_index(catalog, item.version_removed.as_deref()),
            a: item.aliases.clone(),
        })
        .collect();

    let recipes = catalog
        .recipes
        .iter()
        .map(|recipe| {
            let mut packed = PackedRecipe::new(
                recipe.id.clone(),
                &recipe.kind,
                recipe.result.clone(),
                compress_version_ranges(&recipe.versions, &catalog.versions),
            );
            packed.gr = recipe.group.clone();

            match &recipe.payload {
                RecipePayload::Shaped { pattern, key, grid } => {
                    packed.p = Some(pattern.clone());
                    packed.k = Some(key.clone());
                    packed.g = Some(grid.clone());
                }
                RecipePayload::Shapeless { ingredients } => {
                    packed.ingredients = Some(ingredients.clone());
                }
                RecipePayload::Cooking {
                    ingredient,
                    experience,
                    cooking_time,
                } => {
                    packed.i = ingredient.clone();
                    packed.xp = (*experience != 0.0).then_some(*experience);
                    packed.ct = (*cooking_time != 0).then_some(*cooking_time);
                }
                RecipePayload::Stonecutting { ingredient } => {
                    packed.i = ingredient.clone();
                }
                RecipePayload::Smithing {
                    base,
                    addition,
                    template,
                } => {
                    packed.b = base.clone();
                    packed.a = addition.clone();
                    packed.tm = template.clone().flatten();
                }
                RecipePayload::Unrecognized {} => {}
            }
            packed
        })
        .collect();

    PackedCatalog {
        v: catalog.versions.clone(),
        i: items,
        r: recipes,
        u: catalog.uses.clone(),
        icons,
    }
}

/// Inline the priority icons found under `<icons_dir>/<namespace>/`.
///
/// Missing icons are skipped silently; unreadable ones are warned about.
pub fn load_priority_icons(icons_dir: &Path, namespace: &str) -> BTreeMap<String, String> {
    let mut icons = BTreeMap::new();
    let dir = icons_dir.join(namespace);

    for name in PRIORITY_ICONS {
        let path = dir.join(format!("{}.png", name));
        if !path.is_file() {
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => {
                icons.insert(
                    format!("{}/{}", namespace, name),
                    format!("data:image/png;base64,{}", BASE64_STANDARD.encode(bytes)),
                );
            }
            Err(e) => warn!(path = %path.display(), error = %e, "failed to read icon"),
        }
    }

    debug!(count = icons.len(), "inlined priority icons");
    icons
}

/// Gzip `data` at the best compression level.
pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Paths and sizes of the written pack files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    pub packed_path: PathBuf,
    pub gzip_path: PathBuf,
    pub packed_bytes: usize,
    pub gzip_bytes: usize,
}

/// Write [`PACKED_FILE`] and [`PACKED_GZ_FILE`] into `out_dir`.
pub fn write_packed(packed: &PackedCatalog, out_dir: &Path) -> Result<PackOutput> {
    std::fs::create_dir_all(out_dir)?;

    let json = serde_json::to_vec(packed)?;
    let gz = gzip(&json)?;

    let packed_path = out_dir.join(PACKED_FILE);
    let gzip_path = out_dir.join(PACKED_GZ_FILE);
    std::fs::write(&packed_path, &json)?;
    std::fs::write(&gzip_path, &gz)?;

    Ok(PackOutput {
        packed_path,
        gzip_path,
        packed_bytes: json.len(),
        gzip_bytes: gz.len(),
    })
}
