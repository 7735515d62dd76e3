mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "craftdex=info,craftdex_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(Commands::default_build);

    // --init may name a file that does not exist yet
    let config = match command {
        Commands::Config { init: true, .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    match command {
        Commands::Build {
            input,
            output,
            versions,
            namespace,
        } => {
            commands::build::handle(&config, input, output, versions, namespace)?;
        }

        Commands::Pack { input, output_dir } => {
            commands::pack::handle(&config, input, output_dir)?;
        }

        Commands::Config { show, init } => {
            commands::configure::handle(&config, cli.config.as_deref(), show, init)?;
        }
    }

    Ok(())
}
