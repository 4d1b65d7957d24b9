// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::types::ValidationMessage;

/// Fatal problems with an uploaded file. Each one becomes a single
/// error-severity message; the display text is what the user sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("CSV file is empty or contains no valid data")]
    Empty,

    #[error(
        "CSV must contain \"title\" and \"text\" columns. Found columns: {}",
        .found.join(", ")
    )]
    MissingColumns { found: Vec<String> },

    #[error("Error processing file. Please ensure it's a valid CSV with proper formatting.")]
    Unreadable { detail: String },

    #[error("Please select a CSV file ({} does not end in .csv)", .0.display())]
    NotCsv(PathBuf),

    #[error("File is {bytes} bytes; the maximum allowed size is {limit} bytes")]
    TooLarge { bytes: u64, limit: u64 },
}

impl IngestError {
    #[must_use]
    pub fn to_message(&self) -> ValidationMessage {
        ValidationMessage::error(self.to_string())
    }
}

#[derive(Debug, Error)]
pub enum NewsCheckError {
    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NewsCheckError>;

// Allow `?` on std::io::Error by converting to NewsCheckError::Io with unknown path.
impl From<std::io::Error> for NewsCheckError {
    fn from(source: std::io::Error) -> Self {
        NewsCheckError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for NewsCheckError {
    fn from(e: toml::de::Error) -> Self {
        NewsCheckError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_found_headers() {
        let err = IngestError::MissingColumns {
            found: vec!["headline".into(), "content".into()],
        };
        assert_eq!(
            err.to_string(),
            "CSV must contain \"title\" and \"text\" columns. Found columns: headline, content"
        );
    }

    #[test]
    fn unreadable_hides_detail() {
        let err = IngestError::Unreadable {
            detail: "invalid utf-8 sequence".into(),
        };
        assert!(!err.to_string().contains("utf-8"));
        assert!(err.to_message().is_error());
    }
}
