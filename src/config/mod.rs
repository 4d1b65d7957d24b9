// src/config/mod.rs
pub mod types;

pub use self::types::{
    Config, IngestConfig, NewsCheckToml, ParserMode, PresenterConfig, ProcessingConfig,
};

use crate::error::{NewsCheckError, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "newscheck.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `newscheck.toml` from the working
    /// directory if one exists.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    /// Applies `newscheck.toml` from the working directory. A malformed file
    /// is logged and ignored so the defaults stay in effect.
    pub fn load_local_config(&mut self) {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return;
        }
        if let Err(e) = self.load_file(path) {
            warn!("ignoring {CONFIG_FILE}: {e}");
        }
    }

    /// Reads and applies the config file at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|source| NewsCheckError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        self.parse_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(())
    }

    /// Replaces the file-backed sections with the contents of `content`.
    ///
    /// # Errors
    /// Returns error if `content` is not a valid `newscheck.toml`.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: NewsCheckToml = toml::from_str(content)?;
        self.ingest = parsed.ingest;
        self.presenter = parsed.presenter;
        self.processing = parsed.processing;
        Ok(())
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the page size or preview width is zero.
    pub fn validate(&self) -> Result<()> {
        if self.presenter.page_size == 0 {
            return Err(NewsCheckError::Config(
                "presenter.page_size must be at least 1".into(),
            ));
        }
        if self.presenter.preview_chars == 0 {
            return Err(NewsCheckError::Config(
                "presenter.preview_chars must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Artificial processing time for a batch of `records`, or zero when
    /// latency simulation is off.
    #[must_use]
    pub fn processing_delay(&self, records: usize) -> Duration {
        if !self.processing.simulate_latency {
            return Duration::ZERO;
        }
        let per_record = self.processing.per_record_delay_ms;
        let count = u64::try_from(records).unwrap_or(u64::MAX);
        let ms = per_record
            .saturating_mul(count)
            .min(self.processing.max_delay_ms);
        Duration::from_millis(ms)
    }

    /// Serializes the file-backed sections back to TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        let doc = NewsCheckToml {
            ingest: self.ingest.clone(),
            presenter: self.presenter.clone(),
            processing: self.processing.clone(),
        };
        toml::to_string_pretty(&doc).map_err(|e| NewsCheckError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_proportional_then_capped() {
        let config = Config::new();
        assert_eq!(config.processing_delay(0), Duration::ZERO);
        assert_eq!(config.processing_delay(5), Duration::from_millis(500));
        assert_eq!(config.processing_delay(30), Duration::from_millis(3000));
        assert_eq!(config.processing_delay(10_000), Duration::from_millis(3000));
    }

    #[test]
    fn delay_disabled() {
        let mut config = Config::new();
        config.processing.simulate_latency = false;
        assert_eq!(config.processing_delay(20), Duration::ZERO);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let mut config = Config::new();
        config
            .parse_toml("[presenter]\npage_size = 25\n[ingest]\nparser = \"strict\"")
            .unwrap();
        assert_eq!(config.presenter.page_size, 25);
        assert_eq!(config.presenter.preview_chars, 100);
        assert_eq!(config.ingest.parser, ParserMode::Strict);
        assert!(config.processing.simulate_latency);
    }

    #[test]
    fn zero_page_size_rejected() {
        let mut config = Config::new();
        config.presenter.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_round_trips_through_to_toml() {
        let mut config = Config::new();
        config.processing.seed = Some(7);
        let text = config.to_toml().unwrap();
        let mut reloaded = Config::new();
        reloaded.parse_toml(&text).unwrap();
        assert_eq!(reloaded, config);
    }
}
