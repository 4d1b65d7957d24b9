// src/heuristics/signals.rs
//! Structural and length signals computed from the raw article text.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const EXCESSIVE_PUNCTUATION_WEIGHT: f64 = 0.5;
pub const SHOUTING_WEIGHT: f64 = 0.5;
pub const CLICKBAIT_WEIGHT: f64 = 0.3;
pub const SENSATIONAL_WEIGHT: f64 = 0.7;
pub const SHORT_TEXT_WEIGHT: f64 = 0.3;
pub const LONG_TEXT_WEIGHT: f64 = 0.2;

/// More sensational phrases than this trips the sensational signal.
pub const SENSATIONAL_THRESHOLD: usize = 2;
/// More all-caps runs than this trips the shouting signal.
pub const SHOUTING_THRESHOLD: usize = 2;
pub const SHORT_TEXT_WORDS: usize = 50;
pub const LONG_TEXT_WORDS: usize = 500;

const CLICKBAIT_TERMS: &[&str] = &["click", "here"];

static EXCESSIVE_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").unwrap());
static SHOUTING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{4,}").unwrap());

/// Which signals fired for one text.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub excessive_punctuation: bool,
    pub shouting: bool,
    pub clickbait: bool,
    pub sensational: bool,
    pub short_text: bool,
    pub long_text: bool,
}

impl Signals {
    /// Evaluates every signal. `lower` must be `text` lower-cased.
    #[must_use]
    pub fn detect(text: &str, lower: &str, sensational_hits: usize) -> Self {
        let words = word_count(text);
        Self {
            excessive_punctuation: has_excessive_punctuation(text),
            shouting: shouting_runs(text) > SHOUTING_THRESHOLD,
            clickbait: has_clickbait(lower),
            sensational: sensational_hits > SENSATIONAL_THRESHOLD,
            short_text: words < SHORT_TEXT_WORDS,
            long_text: words > LONG_TEXT_WORDS,
        }
    }

    /// Amount these signals add to the fake score.
    #[must_use]
    pub fn fake_bonus(&self) -> f64 {
        [
            (self.excessive_punctuation, EXCESSIVE_PUNCTUATION_WEIGHT),
            (self.shouting, SHOUTING_WEIGHT),
            (self.clickbait, CLICKBAIT_WEIGHT),
            (self.sensational, SENSATIONAL_WEIGHT),
            (self.short_text, SHORT_TEXT_WEIGHT),
        ]
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, weight)| weight)
        .sum()
    }

    /// Amount these signals add to the real score.
    #[must_use]
    pub fn real_bonus(&self) -> f64 {
        if self.long_text {
            LONG_TEXT_WEIGHT
        } else {
            0.0
        }
    }

    /// Names of the signals that fired, for reporting.
    #[must_use]
    pub fn fired(&self) -> Vec<&'static str> {
        [
            (self.excessive_punctuation, "excessive punctuation"),
            (self.shouting, "all-caps runs"),
            (self.clickbait, "clickbait wording"),
            (self.sensational, "sensational tone"),
            (self.short_text, "short text"),
            (self.long_text, "long text"),
        ]
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, name)| *name)
        .collect()
    }
}

#[must_use]
pub fn has_excessive_punctuation(text: &str) -> bool {
    EXCESSIVE_PUNCTUATION_RE.is_match(text)
}

/// Non-overlapping runs of four or more ASCII capitals.
#[must_use]
pub fn shouting_runs(text: &str) -> usize {
    SHOUTING_RE.find_iter(text).count()
}

#[must_use]
pub fn has_clickbait(lower: &str) -> bool {
    CLICKBAIT_TERMS.iter().any(|term| lower.contains(term))
}

/// Words separated by single spaces. Consecutive spaces yield empty words and
/// an empty string counts as one word.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}
