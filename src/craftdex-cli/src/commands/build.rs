//! Catalog build command

use anyhow::{Context, Result};
use craftdex::{Catalog, ExtractedAssets};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;

/// Handle the build command
pub fn handle(
    config: &Config,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    versions: Vec<String>,
    namespace: Option<String>,
) -> Result<()> {
    let root = input.unwrap_or_else(|| config.extracted_dir.clone());
    let output = output.unwrap_or_else(|| config.catalog_path());
    let namespace = namespace.unwrap_or_else(|| config.namespace.clone());
    let versions = if versions.is_empty() {
        config.versions.clone()
    } else {
        versions
    };

    println!("Building crafting catalog...\n");
    let catalog = run(&root, &namespace, versions, &output)?;

    println!("Catalog written to {}", output.display());
    println!("  Versions: {}", catalog.versions.len());
    println!("  Items:    {}", catalog.items.len());
    println!("  Recipes:  {}", catalog.recipes.len());
    println!("  Uses:     {}", catalog.uses.len());

    Ok(())
}

/// Build from `root` and write the catalog to `output`.
///
/// An empty `versions` list means every version directory under `root`, in
/// release order.
pub fn run(root: &Path, namespace: &str, versions: Vec<String>, output: &Path) -> Result<Catalog> {
    let assets = ExtractedAssets::open(root)
        .with_context(|| format!("Failed to open extracted assets at {}", root.display()))?
        .with_namespace(namespace);

    let versions = if versions.is_empty() {
        assets
            .discover_versions()
            .with_context(|| format!("Failed to list versions in {}", root.display()))?
    } else {
        versions
    };

    if versions.is_empty() {
        warn!(root = %root.display(), "no versions to process");
    }
    info!(count = versions.len(), first = ?versions.first(), last = ?versions.last(), "processing versions");

    let catalog = craftdex::build(&versions, &assets);
    write_catalog(&catalog, output)?;
    Ok(catalog)
}

fn write_catalog(catalog: &Catalog, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
    fs::write(output, json).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
