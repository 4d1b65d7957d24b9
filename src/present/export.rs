// src/present/export.rs
//! CSV export of a classified batch.
//!
//! The export schema is `ID,Title,Text Preview,Prediction,Confidence`. Fed back
//! to the ingestor, `Text Preview` resolves as the text column, so a re-import
//! classifies the truncated previews rather than the original bodies.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::error::{NewsCheckError, Result};
use crate::types::{Batch, ClassificationResult};

pub const EXPORT_HEADER: [&str; 5] = ["ID", "Title", "Text Preview", "Prediction", "Confidence"];
pub const EXPORT_PREFIX: &str = "fake_news_detection_results_";
const ELLIPSIS: &str = "...";

/// `fake_news_detection_results_<YYYY-MM-DD>.csv`
#[must_use]
pub fn default_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_PREFIX}{}.csv", date.format("%Y-%m-%d"))
}

/// Default export name for today's UTC date.
#[must_use]
pub fn todays_file_name() -> String {
    default_file_name(Utc::now().date_naive())
}

/// First `max_chars` characters of `body`, with `...` appended if cut.
#[must_use]
pub fn preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &body[..cut]),
        None => body.to_string(),
    }
}

/// Confidence as a percentage with one decimal, e.g. `87.3%`.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

fn export_row(result: &ClassificationResult, preview_chars: usize) -> [String; 5] {
    [
        result.id.to_string(),
        result.title.clone(),
        preview(&result.body, preview_chars),
        result.label.to_string(),
        format_confidence(result.confidence),
    ]
}

/// Serializes the whole batch. Every field is quoted and rows are joined by
/// `\n` with no trailing newline.
///
/// # Errors
/// Returns error if the CSV writer fails.
pub fn to_csv(batch: &Batch, preview_chars: usize) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for result in batch {
        writer.write_record(export_row(result, preview_chars))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NewsCheckError::Export(e.into_error().into()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| NewsCheckError::Other(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Resolves where an export goes: `out` itself, or the dated default name
/// inside `out` when it is a directory, or in the working directory when
/// `out` is absent.
#[must_use]
pub fn resolve_target(out: Option<&Path>, file_name: &str) -> PathBuf {
    match out {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

/// Writes the batch to `path`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn write(batch: &Batch, path: &Path, preview_chars: usize) -> Result<()> {
    let text = to_csv(batch, preview_chars)?;
    fs::write(path, text).map_err(|source| NewsCheckError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    info!(path = %path.display(), rows = batch.len(), "exported results");
    Ok(())
}
