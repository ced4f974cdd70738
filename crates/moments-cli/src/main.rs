use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use moments_cli::commands::{cluster, edit, suggest};
use moments_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Cluster {
            albums,
            epsilon,
            min_points,
            auto_epsilon,
            json,
            assignments,
        }) => {
            let config = load_config(cli.config.as_deref())?.with_overrides(
                *epsilon,
                *min_points,
                *auto_epsilon,
            );
            let output = if *assignments {
                cluster::Output::Assignments
            } else if *json {
                cluster::Output::Json
            } else {
                cluster::Output::Text
            };
            cluster::run(&mut stdout, albums, &config, output)?;
        }
        Some(Commands::SuggestEpsilon { album }) => {
            suggest::run(&mut stdout, album)?;
        }
        Some(Commands::Split { album, at, json }) => {
            edit::split(&mut stdout, album, at, *json)?;
        }
        Some(Commands::Merge { albums, json }) => {
            edit::merge(&mut stdout, albums, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
