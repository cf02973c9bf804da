//! Elbi CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! elbi
//! elbi browse --id 27205
//!
//! # Print a page of results
//! elbi search "one piece" --page 2
//! elbi -q search
//!
//! # Print a detail sheet
//! elbi show 27205
//!
//! # First-time setup
//! elbi config init
//! ```
//!
//! # Configuration
//!
//! Settings are read from `~/.config/elbi/config.toml` on Linux (or
//! `--config`) and `ELBI_*` environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use elbi::{
    ElbiError,
    cli::{Cli, Commands},
    commands::{self, Services},
    config::{AppConfig, ConfigError},
    logging,
    storage::{MemoryStore, SledStore},
    ui::views::SharedStore,
};

type Result<T> = std::result::Result<T, ElbiError>;

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(AppConfig::config_path()?),
    }
}

fn load_config(path: &std::path::Path) -> Result<AppConfig> {
    AppConfig::load_from(path).map_err(|e| {
        if matches!(e, ConfigError::Missing(..)) {
            eprintln!(
                "{} run `elbi config init` or set ELBI_* environment variables",
                "Hint:".yellow()
            );
        }
        e.into()
    })
}

fn handle_browse_command(
    cli: &Cli,
    config: &AppConfig,
    services: &Services,
    id: Option<u64>,
) -> Result<()> {
    if cli.no_persist {
        let store: SharedStore = Arc::new(MemoryStore::new());
        return commands::browse(services, store, id);
    }

    let path = config.resolved_storage_path()?;
    tracing::debug!(path = %path.display(), "opening storage");
    let sled = Arc::new(SledStore::open(&path)?);

    let result = commands::browse(services, sled.clone(), id);
    if let Err(e) = sled.flush() {
        tracing::warn!(error = %e, "failed to flush storage");
    }
    result
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();
    let path = config_path(&cli)?;

    if let Commands::Config { command } = command {
        return commands::config(command, &path, cli.quiet);
    }

    let config = load_config(&path)?;

    let level = logging::resolve_level(cli.log_level.as_deref(), config.log_level.as_deref());
    logging::init_logging(&AppConfig::data_dir()?, &level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "elbi starting");

    let services = Services::from_config(&config)?;

    match &command {
        Commands::Browse { id } => handle_browse_command(&cli, &config, &services, *id)?,
        Commands::Search { page, .. } => {
            commands::search(&services, command.search_term(), *page, cli.quiet)?;
        }
        Commands::Show { id } => commands::show(&services, *id)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
