//! CLI argument definitions for craftdex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "craftdex")]
#[command(about = "Version-aware crafting catalog builder", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./craftdex.toml, then the user config directory)
    #[arg(long, global = true, env = "CRAFTDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Runs `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the catalog from extracted version assets
    #[command(visible_alias = "b")]
    Build {
        /// Extraction root holding one directory per version
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Catalog file to write (default: <out_dir>/index.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Version to include, oldest first (repeatable; default: discover)
        #[arg(long = "version", value_name = "VERSION")]
        versions: Vec<String>,

        /// Asset namespace
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Pack the catalog into a compact, gzipped document
    #[command(visible_alias = "p")]
    Pack {
        /// Catalog file to read (default: <out_dir>/index.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for data.min.json and data.min.json.gz (default: <out_dir>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show or initialise configuration
    #[command(visible_alias = "c")]
    Config {
        /// Print the effective configuration
        #[arg(long)]
        show: bool,

        /// Write the default configuration to ./craftdex.toml
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    /// The command run when none is given
    pub fn default_build() -> Self {
        Commands::Build {
            input: None,
            output: None,
            versions: Vec::new(),
            namespace: None,
        }
    }
}
