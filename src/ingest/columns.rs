// src/ingest/columns.rs
use crate::error::IngestError;
use crate::types::Record;

const TITLE_NEEDLE: &str = "title";
const TEXT_NEEDLE: &str = "text";

/// Positions of the resolved title and text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: usize,
    pub text: usize,
}

impl ColumnMap {
    /// Finds the first header containing "title" and the first containing
    /// "text", ignoring case.
    ///
    /// # Errors
    /// Returns `IngestError::MissingColumns` naming every header found.
    pub fn resolve(headers: &[String]) -> Result<Self, IngestError> {
        let title = find(headers, TITLE_NEEDLE);
        let text = find(headers, TEXT_NEEDLE);
        match (title, text) {
            (Some(title), Some(text)) => Ok(Self { title, text }),
            _ => Err(IngestError::MissingColumns {
                found: headers.to_vec(),
            }),
        }
    }

    /// Builds a record from a row, or `None` if title or text is empty.
    #[must_use]
    pub fn extract(&self, row: &[String]) -> Option<Record> {
        let title = row.get(self.title)?;
        let text = row.get(self.text)?;
        if title.is_empty() || text.is_empty() {
            return None;
        }
        Some(Record::new(title.as_str(), text.as_str()))
    }
}

fn find(headers: &[String], needle: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let map = ColumnMap::resolve(&headers(&["id", "Article_Title", "BodyText"])).unwrap();
        assert_eq!(map, ColumnMap { title: 1, text: 2 });
    }

    #[test]
    fn first_match_wins() {
        let map = ColumnMap::resolve(&headers(&["subtitle", "title", "text", "text2"])).unwrap();
        assert_eq!(map.title, 0);
        assert_eq!(map.text, 2);
    }

    #[test]
    fn missing_text_reports_found_columns() {
        let err = ColumnMap::resolve(&headers(&["title", "body"])).unwrap_err();
        assert_eq!(
            err,
            IngestError::MissingColumns {
                found: headers(&["title", "body"])
            }
        );
    }

    #[test]
    fn extract_skips_empty_fields() {
        let map = ColumnMap { title: 0, text: 1 };
        assert!(map.extract(&headers(&["", "body"])).is_none());
        assert!(map.extract(&headers(&["title", ""])).is_none());
        assert_eq!(
            map.extract(&headers(&["title", "body"])),
            Some(Record::new("title", "body"))
        );
    }
}
