//! Tracing subscriber setup
//!
//! The TUI owns stdout, so log lines go to `<data dir>/elbi/elbi.log`.
//! Filter resolution order: `RUST_LOG`, then `--log-level`, then the
//! config's `log_level`, then `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the log file inside the data directory
pub const LOG_FILE: &str = "elbi.log";

/// Pick the filter directive from the flag and config values
#[must_use]
pub fn resolve_level(cli: Option<&str>, config: Option<&str>) -> String {
    let given = |level: &&str| !level.trim().is_empty();
    cli.filter(given)
        .or_else(|| config.filter(given))
        .unwrap_or("info")
        .to_string()
}

/// Build the filter, letting `RUST_LOG` override `level`
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber writing to `data_dir/elbi.log`
///
/// Logging is optional: if the directory or file cannot be created the
/// program runs without a subscriber. Only the first call takes effect.
pub fn init_logging(data_dir: &Path, level: &str) {
    if fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_config() {
        assert_eq!(resolve_level(Some("debug"), Some("warn")), "debug");
        assert_eq!(resolve_level(None, Some("warn")), "warn");
        assert_eq!(resolve_level(None, None), "info");
    }

    #[test]
    fn test_blank_level_falls_back() {
        assert_eq!(resolve_level(Some("  "), None), "info");
        assert_eq!(resolve_level(Some(""), Some("warn")), "warn");
        assert_eq!(resolve_level(None, Some(" ")), "info");
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested");
        init_logging(&data_dir, "info");
        assert!(data_dir.join(LOG_FILE).exists());
    }
}
