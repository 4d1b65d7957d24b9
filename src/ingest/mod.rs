// src/ingest/mod.rs
//! CSV ingestion: parse, resolve the title/text columns, drop incomplete rows.

pub mod columns;
pub mod naive;
pub mod strict;

pub use columns::ColumnMap;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{IngestConfig, ParserMode};
use crate::error::IngestError;
use crate::types::{Record, ValidationMessage};

/// Header plus data rows, each row exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Pads short rows with empty strings and drops surplus values.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }
}

/// Records that survived row filtering, plus how many did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    pub records: Vec<Record>,
    pub dropped: usize,
}

impl Ingested {
    /// The non-fatal message for dropped rows, if any were dropped.
    #[must_use]
    pub fn warning(&self) -> Option<ValidationMessage> {
        (self.dropped > 0).then(|| {
            ValidationMessage::warning(format!(
                "{} rows skipped due to missing title or text",
                self.dropped
            ))
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    config: IngestConfig,
}

impl Ingestor {
    #[must_use]
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Reads an uploaded file after checking its extension and size.
    ///
    /// # Errors
    /// Returns `NotCsv`, `TooLarge`, or `Unreadable` (missing file, bad UTF-8).
    pub fn read_file(&self, path: &Path) -> Result<String, IngestError> {
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(IngestError::NotCsv(path.to_path_buf()));
        }

        let bytes = fs::metadata(path)
            .map_err(|e| IngestError::Unreadable {
                detail: format!("{}: {e}", path.display()),
            })?
            .len();
        if bytes > self.config.max_file_bytes {
            return Err(IngestError::TooLarge {
                bytes,
                limit: self.config.max_file_bytes,
            });
        }

        let raw = fs::read(path).map_err(|e| IngestError::Unreadable {
            detail: format!("{}: {e}", path.display()),
        })?;
        String::from_utf8(raw).map_err(|e| IngestError::Unreadable {
            detail: format!("{}: {e}", path.display()),
        })
    }

    /// Turns raw CSV text into records.
    ///
    /// # Errors
    /// Returns `Empty` when there are no data rows (checked first),
    /// `MissingColumns` when no title/text header exists, and `Unreadable`
    /// when the strict reader rejects the input.
    pub fn ingest(&self, content: &str) -> Result<Ingested, IngestError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let table = match self.config.parser {
            ParserMode::Naive => naive::parse(content),
            ParserMode::Strict => strict::parse(content)?,
        };
        debug!(
            mode = ?self.config.parser,
            columns = table.headers.len(),
            rows = table.rows.len(),
            "parsed csv"
        );

        if table.rows.is_empty() {
            return Err(IngestError::Empty);
        }

        let columns = ColumnMap::resolve(&table.headers)?;
        let total = table.rows.len();
        let records: Vec<Record> = table
            .rows
            .iter()
            .filter_map(|row| columns.extract(row))
            .collect();
        let dropped = total - records.len();
        if dropped > 0 {
            warn!(dropped, total, "rows missing title or text");
        }

        Ok(Ingested { records, dropped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive() -> Ingestor {
        Ingestor::default()
    }

    #[test]
    fn header_only_is_empty() {
        assert_eq!(naive().ingest("title,text\n"), Err(IngestError::Empty));
        assert_eq!(naive().ingest(""), Err(IngestError::Empty));
    }

    #[test]
    fn empty_checked_before_columns() {
        assert_eq!(naive().ingest("foo,bar\n\n"), Err(IngestError::Empty));
    }

    #[test]
    fn dropped_rows_counted() {
        let out = naive()
            .ingest("title,text\na,b\n,missing title\nmissing text,\nc,d")
            .unwrap();
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.dropped, 2);
        assert_eq!(
            out.warning().map(|w| w.message),
            Some("2 rows skipped due to missing title or text".to_string())
        );
    }

    #[test]
    fn no_warning_when_nothing_dropped() {
        let out = naive().ingest("title,text\na,b").unwrap();
        assert!(out.warning().is_none());
    }

    #[test]
    fn bom_is_ignored() {
        let out = naive().ingest("\u{feff}title,text\na,b").unwrap();
        assert_eq!(out.records, vec![Record::new("a", "b")]);
    }

    #[test]
    fn strict_mode_keeps_quoted_commas() {
        let ingestor = Ingestor::new(IngestConfig {
            parser: ParserMode::Strict,
            ..IngestConfig::default()
        });
        let out = ingestor
            .ingest("title,text\n\"Markets, again\",\"Stocks rose, then fell\"")
            .unwrap();
        assert_eq!(
            out.records,
            vec![Record::new("Markets, again", "Stocks rose, then fell")]
        );
    }

    #[test]
    fn table_pads_rows() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into()], vec!["1".into(), "2".into(), "3".into()]],
        );
        assert_eq!(table.rows[0], vec!["1", ""]);
        assert_eq!(table.rows[1], vec!["1", "2"]);
    }
}
