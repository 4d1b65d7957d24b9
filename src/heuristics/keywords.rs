// src/heuristics/keywords.rs
//! Fixed phrase lists matched against lower-cased article text.

pub const FAKE_INDICATORS: &[&str] = &[
    "breaking",
    "urgent",
    "shocking",
    "unbelievable",
    "exclusive",
    "leaked",
    "secret",
    "hidden",
    "exposed",
    "revealed",
    "must read",
    "you won't believe",
    "doctors hate",
    "this one trick",
    "click here",
    "amazing",
    "incredible",
    "miracle",
    "scam",
    "hoax",
    "fake media",
    "they don't want you to know",
    "banned",
    "censored",
    "cover up",
];

pub const REAL_INDICATORS: &[&str] = &[
    "according to",
    "research shows",
    "study finds",
    "experts say",
    "data indicates",
    "report states",
    "officials confirm",
    "evidence suggests",
    "published in",
    "peer reviewed",
    "university",
    "institute",
    "department",
    "analysis",
    "statistics",
    "survey",
    "government",
    "official",
    "spokesman",
    "representative",
    "source",
    "reuters",
    "associated press",
    "cnn",
    "bbc",
    "new york times",
    "washington post",
];

pub const SENSATIONAL_WORDS: &[&str] = &[
    "incredible",
    "amazing",
    "shocking",
    "unbelievable",
    "outrageous",
    "stunning",
    "mind-blowing",
    "earth-shattering",
    "revolutionary",
    "unprecedented",
];

/// The three phrase lists a classifier scores against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSets {
    pub fake: &'static [&'static str],
    pub real: &'static [&'static str],
    pub sensational: &'static [&'static str],
}

impl KeywordSets {
    pub const STANDARD: Self = Self {
        fake: FAKE_INDICATORS,
        real: REAL_INDICATORS,
        sensational: SENSATIONAL_WORDS,
    };
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Phrases from `list` contained in `lower`, in list order.
#[must_use]
pub fn matches(lower: &str, list: &'static [&'static str]) -> Vec<&'static str> {
    list.iter()
        .copied()
        .filter(|phrase| lower.contains(phrase))
        .collect()
}
