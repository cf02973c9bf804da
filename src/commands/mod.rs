//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the services built from configuration.

pub mod browse;
pub mod config;
pub mod search;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use search::execute as search;
pub use show::execute as show;

use std::sync::Arc;
use std::time::Duration;

use crate::ElbiError;
use crate::api::{Endpoints, Fetcher, HttpFetcher};
use crate::config::AppConfig;
use crate::query::{CacheSettings, QueryClient};

type Result<T> = std::result::Result<T, ElbiError>;

/// Network-facing pieces shared by every command
#[derive(Debug, Clone)]
pub struct Services {
    pub client: QueryClient,
    pub endpoints: Endpoints,
    pub debounce: Duration,
}

impl Services {
    /// Build services that talk to the configured catalog over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is malformed or the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(
            &config.api_key,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Build services around an arbitrary fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is malformed.
    pub fn with_fetcher(config: &AppConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let settings = CacheSettings {
            capacity: config.cache_capacity,
            ttl: Duration::from_secs(config.cache_ttl_secs),
        };

        Ok(Self {
            client: QueryClient::new(fetcher, settings),
            endpoints: Endpoints::from_config(config)?,
            debounce: Duration::from_millis(config.debounce_ms),
        })
    }
}
