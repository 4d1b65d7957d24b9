// tests/unit_session.rs
use std::fmt::Write;
use std::fs;
use newscheck_core::config::Config;
use newscheck_core::heuristics::FixedJitter;
use newscheck_core::present::export;
use newscheck_core::session::Session;
use newscheck_core::types::Severity;

fn rows(n: usize) -> String {
    let mut s = String::from("title,text\n");
    for i in 1..=n {
        let _ = writeln!(s, "Headline {i},Article body number {i}");
    }
    s
}

fn session() -> Session<FixedJitter> {
    Session::with_jitter(&Config::new(), FixedJitter(0.0))
}

#[test]
fn test_pagination_over_batch() {
    let mut s = session();
    assert!(s.upload(&rows(25)).is_empty());
    assert_eq!(s.total_pages(), 3);
    assert_eq!(s.current_items().len(), 10);
    assert_eq!(s.current_items()[0].id, 1);
    assert!(s.go_to_page(3));
    assert_eq!(s.current_items().len(), 5);
    let w = s.window();
    assert_eq!((w.first, w.last, w.total), (21, 25, 25));
    assert_eq!(s.stats().total, 25);
}

#[test]
fn test_upload_file_error_message() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("empty.csv");
    fs::write(&path, "title,text\n").unwrap();
    let mut s = session();
    let messages = s.upload_file(&path, |_| {}).to_vec();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].severity, Severity::Error);
    assert_eq!(messages[0].message, "CSV file is empty or contains no valid data");
    assert!(s.batch().is_none());
}

#[test]
fn test_export_written_to_directory() {
    let d = tempfile::tempdir().unwrap();
    let mut s = session();
    s.upload(&rows(3));
    let target = export::resolve_target(Some(d.path()), &export::todays_file_name());
    export::write(s.batch().unwrap(), &target, 100).unwrap();

    let text = fs::read_to_string(&target).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "\"ID\",\"Title\",\"Text Preview\",\"Prediction\",\"Confidence\"");
    assert!(lines[1].starts_with("\"1\",\"Headline 1\",\"Article body number 1\","));
    assert!(target
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(export::EXPORT_PREFIX)));
}

#[test]
fn test_reimport_reads_previews() {
    let mut s = session();
    s.upload("title,text\nLong one,abcdefghij\n");
    let exported = export::to_csv(s.batch().unwrap(), 4).unwrap();
    assert!(s.upload(&exported).is_empty());
    assert_eq!(s.results()[0].title, "Long one");
    assert_eq!(s.results()[0].body, "abcd...");
}
