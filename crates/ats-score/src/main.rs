//! ats-score CLI
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use ats_score::{Cli, Commands, commands};
use ats_score_core::config::{Config, ConfigLoader, ConfigSources};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help guarantees a subcommand past this point
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) =
        load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let log_target = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.as_ref().map(|dir| dir.clone().into_std_path_buf()),
    );
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&log_target, filter)
        .context("failed to initialize logging")?;

    debug!(
        command = command_name(&command),
        json = cli.json,
        verbose = cli.verbose,
        quiet = cli.quiet,
        chdir = ?cli.chdir,
        config_file = ?sources.primary_file(),
        "starting"
    );

    let result = run(command, cli.json, config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

/// Discover project config from the working directory, then layer `--config` on top.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = utf8(std::env::current_dir().context("failed to determine current directory")?)?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path.to_path_buf())?);
    }
    Ok(loader.load()?)
}

fn utf8(path: PathBuf) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow::anyhow!("path is not valid UTF-8: {}", path.display()))
}

const fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Score(_) => "score",
        Commands::Skills(_) => "skills",
        Commands::Info(_) => "info",
        #[cfg(feature = "mcp")]
        Commands::Serve(_) => "serve",
    }
}

fn run(command: Commands, json: bool, config: Config, sources: &ConfigSources) -> anyhow::Result<()> {
    match command {
        Commands::Score(args) => commands::score::cmd_score(args, json, &config),
        Commands::Skills(args) => commands::skills::cmd_skills(args, json),
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to create async runtime for MCP server")?
            .block_on(commands::serve::cmd_serve(args, config)),
    }
}
