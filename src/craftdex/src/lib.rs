//! Version-aware crafting catalog builder
//!
//! Consolidates the recipe definitions shipped with many game releases into
//! one catalog of unique items and recipes.
//!
//! # Pipeline
//!
//! For each version, oldest first:
//! 1. Classify the version into an [`Era`]; legacy releases encode block
//!    variants as `name:meta`, modern releases give each variant its own id.
//! 2. Parse every raw recipe into a canonical [`Recipe`], resolving
//!    ingredients and normalizing ids to their modern form.
//! 3. Register every result and ingredient item the first time it is seen,
//!    expanding tags against the version's [`TagTable`].
//!
//! After the last version, recipes that are identical across versions are
//! merged (their version lists united) and a reverse [`UsesIndex`] is built.
//!
//! ```no_run
//! use craftdex::{build, ExtractedAssets};
//!
//! let assets = ExtractedAssets::open(".cache/extracted")?;
//! let versions = assets.discover_versions()?;
//! let catalog = build(&versions, &assets);
//! println!("{} items, {} recipes", catalog.items.len(), catalog.recipes.len());
//! # Ok::<(), craftdex::Error>(())
//! ```

use std::path::PathBuf;

pub mod assets;
pub mod catalog;
pub mod dedup;
pub mod files;
pub mod ident;
pub mod ingredient;
pub mod lang;
pub mod pack;
pub mod recipe;
pub mod reference;
pub mod tags;
pub mod uses;
pub mod version;

#[doc(inline)]
pub use assets::ExtractedAssets;
#[doc(inline)]
pub use catalog::{build, AssetSource, Catalog, CatalogBuilder, Item, RawRecipe, VersionAssets};
#[doc(inline)]
pub use dedup::{dedupe, finalize};
#[doc(inline)]
pub use ident::{normalize, remap, Remap};
#[doc(inline)]
pub use ingredient::{resolve_ingredient, Ingredient};
#[doc(inline)]
pub use lang::LanguageTable;
#[doc(inline)]
pub use pack::{pack, PackedCatalog, VersionSpan};
#[doc(inline)]
pub use recipe::{parse_recipe, ItemStack, Recipe, RecipeKind, RecipePayload};
#[doc(inline)]
pub use reference::Category;
#[doc(inline)]
pub use tags::{expand_to_items, TagTable};
#[doc(inline)]
pub use uses::UsesIndex;
#[doc(inline)]
pub use version::{Era, ReleaseNumber};

/// Errors that stop a run
///
/// Problems with individual files or versions are logged and skipped
/// instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Extraction root not found: {0}")]
    MissingRoot(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
