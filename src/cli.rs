//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Interactive movie browser (default)
//! - **search**: Print one page of results
//! - **show**: Print a movie's detail sheet
//! - **config**: Set up or inspect configuration
//!
//! Global flags apply to every command: `--quiet` for scripting-friendly
//! output, `--config` to read a different file, `--log-level` to set the
//! log filter and `--no-persist` to keep search state in memory only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::MovieId;
use crate::search::MAX_PAGES;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "elbi")]
#[command(about = "Browse and search a movie catalog from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `elbi=trace` (`RUST_LOG` wins)
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Keep the search term and page in memory instead of on disk
    #[arg(long = "no-persist", global = true)]
    pub no_persist: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Open this movie's detail page directly
        #[arg(long = "id", value_name = "ID")]
        id: Option<MovieId>,
    },

    /// Print one page of popular movies, or of search results for QUERY
    #[command(visible_alias = "s")]
    Search {
        /// Title to search for
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Page to print
        #[arg(
            short = 'p',
            long = "page",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGES))
        )]
        page: u32,
    },

    /// Print the detail sheet of a movie
    Show {
        /// Movie id
        id: MovieId,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Prompt for the API key and endpoints and write the config file
    Init,
    /// Print the effective configuration with the API key masked
    Show,
    /// Print the config file location
    Path,
}

impl Commands {
    /// Query text of a search, with blank input treated as no query
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        match self {
            Self::Search { query, .. } => query
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty()),
            _ => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse { id: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_browse() {
        let cli = Cli::parse_from(["elbi"]);
        assert_eq!(cli.get_command(), Commands::Browse { id: None });
        assert!(!cli.quiet);
    }

    #[test]
    fn test_browse_with_id() {
        let cli = Cli::parse_from(["elbi", "b", "--id", "27205"]);
        assert_eq!(cli.get_command(), Commands::Browse { id: Some(27205) });
    }

    #[test]
    fn test_search_with_page_and_globals() {
        let cli = Cli::parse_from(["elbi", "search", "dragon ball", "-p", "3", "-q", "--no-persist"]);
        let command = cli.get_command();
        assert_eq!(command.search_term(), Some("dragon ball"));
        assert_eq!(
            command,
            Commands::Search {
                query: Some("dragon ball".into()),
                page: 3
            }
        );
        assert!(cli.quiet);
        assert!(cli.no_persist);
    }

    #[test]
    fn test_search_without_query_defaults_to_page_one() {
        let cli = Cli::parse_from(["elbi", "search"]);
        let command = cli.get_command();
        assert_eq!(command.search_term(), None);
        assert_eq!(command, Commands::Search { query: None, page: 1 });
    }

    #[test]
    fn test_blank_query_is_no_query() {
        let cli = Cli::parse_from(["elbi", "search", "   "]);
        assert_eq!(cli.get_command().search_term(), None);
    }

    #[test]
    fn test_page_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["elbi", "search", "-p", "0"]).is_err());
        assert!(Cli::try_parse_from(["elbi", "search", "-p", "501"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["elbi", "-c", "/tmp/elbi.toml", "config", "show"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Show
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/elbi.toml")));
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::parse_from(["elbi", "show", "1", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.get_command(), Commands::Show { id: 1 });
    }
}
