// src/ingest/strict.rs
//! RFC 4180 reader for files whose fields contain commas, quotes or newlines.

use csv::{ReaderBuilder, StringRecord, Trim};

use super::Table;
use crate::error::IngestError;

/// Parses `content` with full quoting support.
///
/// # Errors
/// Returns `IngestError::Unreadable` if the reader rejects the input.
pub fn parse(content: &str) -> Result<Table, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| unreadable("headers", &e))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| unreadable(&format!("row {}", index + 1), &e))?;
        if is_blank(&record) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn unreadable(what: &str, e: &csv::Error) -> IngestError {
    IngestError::Unreadable {
        detail: format!("failed to read CSV {what}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_and_newline_kept() {
        let table = parse("title,text\n\"Hello, world\",\"line one\nline two\"\n").unwrap();
        assert_eq!(table.headers, vec!["title", "text"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Hello, world");
        assert_eq!(table.rows[0][1], "line one\nline two");
    }

    #[test]
    fn doubled_quotes_unescaped() {
        let table = parse("title,text\n\"He said \"\"hi\"\"\",body\n").unwrap();
        assert_eq!(table.rows[0][0], "He said \"hi\"");
    }

    #[test]
    fn ragged_rows_normalized() {
        let table = parse("title,text,author\nonly\n").unwrap();
        assert_eq!(table.rows[0], vec!["only", "", ""]);
    }

    #[test]
    fn blank_records_skipped() {
        let table = parse("title,text\n , \na,b\n").unwrap();
        assert_eq!(table.rows, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn reader_errors_map_to_generic_message() {
        let err = unreadable("row 1", &csv::Error::from(std::io::Error::other("boom")));
        assert!(matches!(err, IngestError::Unreadable { .. }));
    }
}
