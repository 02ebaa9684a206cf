//! Terminal configuration
//!
//! Resolution order: CLI flags win over the config file, which wins over
//! the defaults baked in here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use kiosk_app::DEFAULT_DWELL;
use kiosk_client::DEFAULT_FEED_URL;

/// Default event poll interval in milliseconds.
const DEFAULT_TICK_MS: u64 = 100;

/// Resolved kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KioskConfig {
    /// Feed base URL.
    pub feed_url: String,
    /// Dwell before the timed board rotation, in milliseconds.
    pub dwell_ms: u64,
    /// Event poll interval, in milliseconds.
    pub tick_ms: u64,
    /// Log file path; without one, log output is discarded (the terminal
    /// owns the tty).
    pub log_file: Option<PathBuf>,
    /// Run without a feed source.
    pub offline: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            dwell_ms: DEFAULT_DWELL.as_millis() as u64,
            tick_ms: DEFAULT_TICK_MS,
            log_file: None,
            offline: false,
        }
    }
}

impl KioskConfig {
    /// Load from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Rotation dwell as a duration.
    #[must_use]
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    /// Event poll interval as a duration.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = KioskConfig::default();
        assert_eq!(config.feed_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.dwell(), Duration::from_millis(5000));
        assert_eq!(config.tick(), Duration::from_millis(100));
        assert!(config.log_file.is_none());
        assert!(!config.offline);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let config: KioskConfig = toml::from_str("dwell_ms = 250").expect("parses");
        assert_eq!(config.dwell_ms, 250);
        assert_eq!(config.feed_url, KioskConfig::default().feed_url);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let parsed: Result<KioskConfig, _> = toml::from_str("dwel_ms = 250");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_without_path_gives_defaults() {
        let config = KioskConfig::load(None).expect("defaults load");
        assert_eq!(config, KioskConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "feed_url = \"http://localhost:3000\"\noffline = true"
        )
        .expect("write config");

        let config = KioskConfig::load(Some(file.path())).expect("config loads");
        assert_eq!(config.feed_url, "http://localhost:3000");
        assert!(config.offline);
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = KioskConfig::load(Some(Path::new("/nonexistent/kiosk.toml")));
        assert!(result.is_err());
    }
}
