// src/ingest/naive.rs
//! Line/comma splitter.
//!
//! Quoted fields are not understood: a comma inside quotes still splits the
//! field and a quoted newline still ends the row. Every double quote is
//! dropped from headers and values.

use super::Table;

#[must_use]
pub fn parse(content: &str) -> Table {
    let mut lines = content.split('\n');
    let headers = lines
        .next()
        .map(split_fields)
        .unwrap_or_default();

    let rows = lines
        .filter(|line| !line.trim().is_empty())
        .map(split_fields)
        .collect();

    Table::new(headers, rows)
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(clean).collect()
}

fn clean(field: &str) -> String {
    field.trim().replace('"', "")
}
