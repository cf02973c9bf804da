//! Elbi - a terminal movie browser
//!
//! Lists popular movies, searches the catalog by title with a debounced
//! input, pages through results and shows a detail sheet per movie. Remote
//! data goes through a coalescing response cache; the search term and page
//! index persist across runs.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod logging;
pub mod output;
pub mod query;
pub mod search;
pub mod sheet;
pub mod storage;
pub mod timer;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ElbiError {
    /// Remote catalog request failed
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// Durable storage could not be opened or read
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
    /// Terminal I/O failed
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
