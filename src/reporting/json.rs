//! JSON output for scripting.

use anyhow::Result;
use serde::Serialize;

use crate::heuristics::Verdict;
use crate::present::{BatchStats, PageWindow};
use crate::types::{ClassificationResult, ValidationMessage};

/// Machine-readable result of a `classify` run.
#[derive(Debug, Serialize)]
pub struct ClassifyReport<'a> {
    pub messages: &'a [ValidationMessage],
    pub stats: BatchStats,
    pub window: PageWindow,
    pub results: &'a [ClassificationResult],
}

/// Machine-readable result of a `score` run.
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub text: &'a str,
    #[serde(flatten)]
    pub verdict: &'a Verdict,
    pub net_score: f64,
}

/// Prints `value` as pretty JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
