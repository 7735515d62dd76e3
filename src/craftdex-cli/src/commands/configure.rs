//! Configuration command handlers

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{Config, LOCAL_CONFIG};

/// Handle the config command
///
/// # Arguments
/// * `explicit` - Config file named with `--config`, if any
/// * `show` - Print the effective configuration
/// * `init` - Write the defaults to `explicit` or `./craftdex.toml`
pub fn handle(config: &Config, explicit: Option<&Path>, show: bool, init: bool) -> Result<()> {
    if init {
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG));
        init_config(&path)?;
        println!("Default configuration written to {}", path.display());
    }

    if show {
        show_config(config, explicit)?;
    }

    if !show && !init {
        show_usage();
    }

    Ok(())
}

/// Write the default configuration, refusing to overwrite an existing file
fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    Config::default().save_to(path)
}

/// Display the effective configuration
fn show_config(config: &Config, explicit: Option<&Path>) -> Result<()> {
    match Config::resolve_path(explicit) {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: none (built-in defaults)"),
    }
    println!();
    print!(
        "{}",
        toml::to_string_pretty(config).context("Failed to serialize config")?
    );
    Ok(())
}

/// Show usage help for the config command
fn show_usage() {
    println!("Usage: craftdex config --show");
    println!("   or: craftdex config --init");
    println!();
    println!("Config is read from --config, ./{}, then the user config directory.", LOCAL_CONFIG);
}
