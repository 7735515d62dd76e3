//! Pack command: compact catalog plus gzip for embedding

use anyhow::{bail, Context, Result};
use craftdex::pack::{load_priority_icons, pack, write_packed, PackOutput};
use craftdex::Catalog;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Handle the pack command
pub fn handle(config: &Config, input: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let input = input.unwrap_or_else(|| config.catalog_path());
    let output_dir = output_dir.unwrap_or_else(|| config.out_dir.clone());

    println!("Packing data for embedding...\n");
    let (original, written, icons) = run(&input, &output_dir, &config.icons_dir(), &config.namespace)?;

    println!("Data packed successfully");
    println!("  Original: {}", format_mb(original));
    println!(
        "  Packed:   {} ({}%)",
        format_mb(written.packed_bytes as u64),
        percent(written.packed_bytes as u64, original)
    );
    println!(
        "  Gzipped:  {:.2} KB ({}%)",
        written.gzip_bytes as f64 / 1024.0,
        percent(written.gzip_bytes as u64, original)
    );
    println!("  Icons included: {} priority items", icons);

    Ok(())
}

/// Pack the catalog at `input` into `output_dir`.
///
/// Returns the catalog's size on disk, the written files and the number of
/// inlined icons.
pub fn run(
    input: &Path,
    output_dir: &Path,
    icons_dir: &Path,
    namespace: &str,
) -> Result<(u64, PackOutput, usize)> {
    if !input.is_file() {
        bail!(
            "No catalog found at {}. Run `craftdex build` first.",
            input.display()
        );
    }

    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let catalog: Catalog = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog {}", input.display()))?;

    let icons = load_priority_icons(icons_dir, namespace);
    let icon_count = icons.len();
    let packed = pack(&catalog, icons);
    let written = write_packed(&packed, output_dir)
        .with_context(|| format!("Failed to write packed data to {}", output_dir.display()))?;

    Ok((contents.len() as u64, written, icon_count))
}

fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

fn percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u64
}
