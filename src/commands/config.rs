//! Config command - set up and inspect configuration

use std::path::Path;

use super::Result;
use crate::cli::ConfigCommands;
use crate::config::AppConfig;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error if the file cannot be read, prompting fails or the
/// new configuration cannot be saved.
pub fn execute(command: ConfigCommands, path: &Path, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Init => {
            let current = AppConfig::read_unvalidated(path)?;
            AppConfig::interactive_setup(&current, path)?;
        }
        ConfigCommands::Show => {
            let config = AppConfig::read_unvalidated(path)?;
            if !quiet {
                println!("# {}", path.display());
            }
            print!("{}", config.to_masked_toml()?);
            if !quiet && let Err(e) = config.validate() {
                eprintln!("Warning: {e}");
            }
        }
        ConfigCommands::Path => println!("{}", path.display()),
    }
    Ok(())
}
