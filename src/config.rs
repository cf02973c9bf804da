//! Configuration module for elbi
//!
//! Manages the API credentials, endpoint bases and tuning knobs.
//! Configuration is read from the user's config directory
//! (`~/.config/elbi/config.toml` on Linux) and layered with `ELBI_*`
//! environment variables, which take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use dialoguer::{Input, Password, theme::ColorfulTheme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
///
/// `Missing` and `InvalidUrl` are fatal at startup: they are reported before
/// any request is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or empty
    #[error("Missing required setting '{0}' (set it in the config file or via ELBI_{1})")]
    Missing(&'static str, &'static str),

    /// A base URL cannot be parsed
    #[error("Invalid URL for '{field}': {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    /// The platform config/data directory cannot be determined
    #[error("Could not determine {0} directory")]
    NoDirectory(&'static str),

    /// Error from the layered config loader
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Error serializing the configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// I/O error while reading or writing the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive prompt failed
    #[error("Failed to read input: {0}")]
    Prompt(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_request_timeout_secs() -> u64 {
    15
}

const fn default_cache_capacity() -> u64 {
    64
}

const fn default_cache_ttl_secs() -> u64 {
    300
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bearer token for the movie catalog API
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the popular/discover listing, e.g. `https://api.themoviedb.org/3/movie/popular`
    #[serde(default)]
    pub movie_list_url: String,

    /// Base URL of the title search endpoint
    #[serde(default)]
    pub movie_search_url: String,

    /// Base URL of the movie detail endpoint, the movie id is appended verbatim
    #[serde(default)]
    pub movie_detail_url: String,

    /// Base URL of the image CDN, relative image paths are appended verbatim
    #[serde(default)]
    pub image_url: String,

    /// Quiet period before the typed search text is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Per-request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of cached responses
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// How long a cached response stays fresh
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Where the search term and page index are persisted
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Log filter directive (overridden by `RUST_LOG`)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            movie_list_url: String::new(),
            movie_search_url: String::new(),
            movie_detail_url: String::new(),
            image_url: String::new(),
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl_secs(),
            storage_path: None,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
        Ok(config_dir.join("elbi").join("config.toml"))
    }

    /// Get the directory used for the log file and the default storage
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the local data directory cannot be determined.
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir().ok_or(ConfigError::NoDirectory("data"))?;
        Ok(data_dir.join("elbi"))
    }

    /// Load configuration from a file path layered with the environment
    ///
    /// The file is optional; settings may come entirely from the environment.
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a required
    /// setting is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_unvalidated(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration without checking for required settings
    ///
    /// Used by `config show` so partial configurations can be inspected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn read_unvalidated(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("ELBI").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Check that every required setting is present and every base URL parses
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` for the first absent setting, or
    /// `ConfigError::InvalidUrl` for the first malformed base URL.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("api_key", "API_KEY", &self.api_key),
            ("movie_list_url", "MOVIE_LIST_URL", &self.movie_list_url),
            ("movie_search_url", "MOVIE_SEARCH_URL", &self.movie_search_url),
            ("movie_detail_url", "MOVIE_DETAIL_URL", &self.movie_detail_url),
            ("image_url", "IMAGE_URL", &self.image_url),
        ];

        for (field, env, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(field, env));
            }
        }

        for &(field, _, value) in &required[1..] {
            reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
                field,
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// Resolve the storage location, falling back to the data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the data directory
    /// cannot be determined.
    pub fn resolved_storage_path(&self) -> Result<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("storage")),
        }
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Render the configuration as TOML with the API key masked
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_masked_toml(&self) -> Result<String> {
        let mut masked = self.clone();
        if !masked.api_key.is_empty() {
            masked.api_key = mask_secret(&masked.api_key);
        }
        Ok(toml::to_string_pretty(&masked)?)
    }

    /// Interactive first-time setup - prompts for the API key and endpoints
    ///
    /// Existing values in `current` are offered as defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if user input cannot be read or saving fails.
    pub fn interactive_setup(current: &Self, path: &Path) -> Result<Self> {
        println!("Welcome to elbi! Let's connect to your movie catalog.\n");

        let theme = ColorfulTheme::default();
        let prompt = |label: &str, default: &str| -> Result<String> {
            Input::with_theme(&theme)
                .with_prompt(label)
                .default(default.to_string())
                .interact_text()
                .map_err(|e| ConfigError::Prompt(e.to_string()))
        };

        let api_key = if current.api_key.is_empty() {
            Password::with_theme(&theme)
                .with_prompt("API read access token")
                .interact()
                .map_err(|e| ConfigError::Prompt(e.to_string()))?
        } else {
            current.api_key.clone()
        };

        let or_default = |value: &str, fallback: &str| {
            if value.is_empty() { fallback.to_string() } else { value.to_string() }
        };

        let config = Self {
            api_key,
            movie_list_url: prompt(
                "Popular movies URL",
                &or_default(&current.movie_list_url, "https://api.themoviedb.org/3/movie/popular"),
            )?,
            movie_search_url: prompt(
                "Movie search URL",
                &or_default(&current.movie_search_url, "https://api.themoviedb.org/3/search/movie"),
            )?,
            movie_detail_url: prompt(
                "Movie detail URL (id is appended)",
                &or_default(&current.movie_detail_url, "https://api.themoviedb.org/3/movie/"),
            )?,
            image_url: prompt(
                "Image base URL (path is appended)",
                &or_default(&current.image_url, "https://image.tmdb.org/t/p/original"),
            )?,
            ..current.clone()
        };

        config.validate()?;
        config.save_to(path)?;

        println!("\nConfiguration saved to {}", path.display());
        Ok(config)
    }
}

/// Keep the last four characters of a secret visible
fn mask_secret(secret: &str) -> String {
    let visible: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> AppConfig {
        AppConfig {
            api_key: "secret-token-1234".into(),
            movie_list_url: "https://api.example.test/3/movie/popular".into(),
            movie_search_url: "https://api.example.test/3/search/movie".into(),
            movie_detail_url: "https://api.example.test/3/movie/".into(),
            image_url: "https://img.example.test/t/p/original".into(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.cache_capacity, 64);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_validate_complete_config() {
        assert!(complete_config().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_api_key() {
        let config = AppConfig {
            api_key: "  ".into(),
            ..complete_config()
        };

        match config.validate() {
            Err(ConfigError::Missing(field, env)) => {
                assert_eq!(field, "api_key");
                assert_eq!(env, "API_KEY");
            }
            other => panic!("Expected Missing error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_missing_base_url() {
        let config = AppConfig {
            movie_search_url: String::new(),
            ..complete_config()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing("movie_search_url", _))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_url() {
        let config = AppConfig {
            movie_list_url: "not a url".into(),
            ..complete_config()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "movie_list_url", .. })
        ));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig {
            debounce_ms: 250,
            storage_path: Some(dir.path().join("store")),
            ..complete_config()
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_key, config.api_key);
        assert_eq!(loaded.debounce_ms, 250);
        assert_eq!(loaded.storage_path, config.storage_path);
    }

    #[test]
    fn test_read_unvalidated_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::read_unvalidated(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_resolved_storage_path_prefers_explicit() {
        let config = AppConfig {
            storage_path: Some(PathBuf::from("/tmp/elbi-store")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolved_storage_path().unwrap(),
            PathBuf::from("/tmp/elbi-store")
        );
    }

    #[test]
    fn test_masked_toml_hides_api_key() {
        let rendered = complete_config().to_masked_toml().unwrap();
        assert!(rendered.contains("****1234"));
        assert!(!rendered.contains("secret-token"));
    }
}
