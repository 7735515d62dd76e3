//! Configuration management for the craftdex CLI

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file name
pub const LOCAL_CONFIG: &str = "craftdex.toml";

/// Catalog file name inside `out_dir`
pub const CATALOG_FILE: &str = "index.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root holding one extracted directory per version
    pub extracted_dir: PathBuf,
    /// Where the catalog, icons and packed files live
    pub out_dir: PathBuf,
    /// Asset namespace to read recipes, tags and lang files from
    pub namespace: String,
    /// Versions to process, oldest first. Empty means discover them.
    pub versions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extracted_dir: PathBuf::from(".cache/extracted"),
            out_dir: PathBuf::from("out"),
            namespace: craftdex::ident::DEFAULT_NAMESPACE.to_string(),
            versions: Vec::new(),
        }
    }
}

impl Config {
    /// Get the path to the user config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("craftdex");

        Ok(config_dir.join("config.toml"))
    }

    /// The file `load` reads: `explicit`, then `./craftdex.toml`, then the
    /// user config file. `None` when only defaults apply.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return Some(local);
        }

        Self::config_path().ok().filter(|p| p.is_file())
    }

    /// Load configuration, falling back to defaults when no file is found.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => {
                if explicit.is_some() && !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::load_from(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Default catalog location
    pub fn catalog_path(&self) -> PathBuf {
        self.out_dir.join(CATALOG_FILE)
    }

    /// Where the icon stage writes `<namespace>/<name>.png`
    pub fn icons_dir(&self) -> PathBuf {
        self.out_dir.join("icons")
    }
}
