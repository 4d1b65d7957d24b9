// tests/unit_ingest.rs
use std::fs;
use newscheck_core::config::{IngestConfig, ParserMode};
use newscheck_core::error::IngestError;
use newscheck_core::ingest::Ingestor;

fn strict() -> Ingestor {
    Ingestor::new(IngestConfig {
        parser: ParserMode::Strict,
        ..IngestConfig::default()
    })
}

#[test]
fn test_valid_rows_kept_in_order() {
    let out = Ingestor::default()
        .ingest("Title,Text,Author\nFirst,Body one,a\nSecond,Body two,b\n")
        .unwrap();
    assert_eq!(out.records.len(), 2);
    assert_eq!(out.records[0].title, "First");
    assert_eq!(out.records[1].body, "Body two");
    assert!(out.warning().is_none());
}

#[test]
fn test_incomplete_rows_single_warning() {
    let out = Ingestor::default()
        .ingest("title,text\nA,body\n,missing title\nB,\nC,body")
        .unwrap();
    assert_eq!(out.records.len(), 2);
    assert_eq!(out.dropped, 2);
    assert_eq!(
        out.warning().unwrap().message,
        "2 rows skipped due to missing title or text"
    );
}

#[test]
fn test_header_only_rejected() {
    assert_eq!(Ingestor::default().ingest("title,text"), Err(IngestError::Empty));
    assert_eq!(Ingestor::default().ingest(""), Err(IngestError::Empty));
}

#[test]
fn test_missing_columns_lists_found() {
    let err = Ingestor::default().ingest("headline,body\nx,y").unwrap_err();
    assert_eq!(
        err.to_string(),
        "CSV must contain \"title\" and \"text\" columns. Found columns: headline, body"
    );
}

#[test]
fn test_column_names_match_by_substring() {
    let out = Ingestor::default()
        .ingest("Article Title,Full Text\nHello,World")
        .unwrap();
    assert_eq!(out.records[0].title, "Hello");
    assert_eq!(out.records[0].body, "World");
}

#[test]
fn test_naive_splits_quoted_commas() {
    let out = Ingestor::default()
        .ingest("title,text\n\"Hello, world\",body")
        .unwrap();
    assert_eq!(out.records[0].title, "Hello");
    assert_eq!(out.records[0].body, "world");
}

#[test]
fn test_strict_keeps_quoted_commas() {
    let out = strict().ingest("title,text\n\"Hello, world\",body").unwrap();
    assert_eq!(out.records[0].title, "Hello, world");
    assert_eq!(out.records[0].body, "body");
}

#[test]
fn test_bom_stripped() {
    let out = Ingestor::default().ingest("\u{feff}title,text\na,b").unwrap();
    assert_eq!(out.records.len(), 1);
}

#[test]
fn test_read_file_checks() {
    let d = tempfile::tempdir().unwrap();
    let txt = d.path().join("data.txt");
    fs::write(&txt, "title,text\na,b").unwrap();
    assert!(matches!(
        Ingestor::default().read_file(&txt),
        Err(IngestError::NotCsv(_))
    ));

    let csv = d.path().join("data.CSV");
    fs::write(&csv, "title,text\na,b").unwrap();
    assert_eq!(Ingestor::default().read_file(&csv).unwrap(), "title,text\na,b");

    let small = Ingestor::new(IngestConfig {
        max_file_bytes: 4,
        ..IngestConfig::default()
    });
    assert!(matches!(
        small.read_file(&csv),
        Err(IngestError::TooLarge { limit: 4, .. })
    ));

    let bad = d.path().join("bad.csv");
    fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
    assert!(matches!(
        Ingestor::default().read_file(&bad),
        Err(IngestError::Unreadable { .. })
    ));
}
