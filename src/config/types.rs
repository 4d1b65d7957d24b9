use serde::{Deserialize, Serialize};

/// Which CSV grammar the ingestor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserMode {
    /// Split on newlines and commas; no quoting support.
    #[default]
    Naive,
    /// RFC 4180 reader with quoted fields.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub parser: ParserMode,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            parser: ParserMode::default(),
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            preview_chars: default_preview_chars(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    #[serde(default = "default_true")]
    pub simulate_latency: bool,
    #[serde(default = "default_per_record_delay_ms")]
    pub per_record_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Fixes the confidence jitter for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            per_record_delay_ms: default_per_record_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            seed: None,
        }
    }
}

const fn default_true() -> bool { true }
const fn default_max_file_bytes() -> u64 { 10 * 1024 * 1024 }
const fn default_page_size() -> usize { 10 }
const fn default_preview_chars() -> usize { 100 }
const fn default_per_record_delay_ms() -> u64 { 100 }
const fn default_max_delay_ms() -> u64 { 3000 }

/// On-disk shape of `newscheck.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewsCheckToml {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub ingest: IngestConfig,
    pub presenter: PresenterConfig,
    pub processing: ProcessingConfig,
}
