// src/heuristics/mod.rs
//! Keyword and pattern scoring that labels an article `Real` or `Fake`.
//!
//! The label depends only on the text. The confidence adds a jitter term from
//! an injected `Jitter`, so two calls on the same text can disagree on
//! confidence but never on label.

pub mod jitter;
pub mod keywords;
pub mod signals;

pub use jitter::{FixedJitter, Jitter, SeededJitter, JITTER_SPREAD};
pub use keywords::KeywordSets;
pub use signals::Signals;

use serde::Serialize;
use tracing::{debug, info};

use crate::types::{Batch, ClassificationResult, Label, Record};

pub const MIN_CONFIDENCE: f64 = 0.55;
pub const MAX_CONFIDENCE: f64 = 0.95;
const CONFIDENCE_BASE: f64 = 0.7;
const NET_SCORE_SCALE: f64 = 10.0;

/// Intermediate scores for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub fake_score: f64,
    pub real_score: f64,
    pub sensational_score: usize,
    pub word_count: usize,
    pub fake_hits: Vec<&'static str>,
    pub real_hits: Vec<&'static str>,
    pub sensational_hits: Vec<&'static str>,
    pub signals: Signals,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn net_score(&self) -> f64 {
        self.fake_score - self.real_score
    }

    #[must_use]
    pub fn label(&self) -> Label {
        if self.net_score() > 0.0 {
            Label::Fake
        } else {
            Label::Real
        }
    }

    /// Confidence for a given jitter offset.
    #[must_use]
    pub fn confidence_with(&self, jitter: f64) -> f64 {
        confidence(self.net_score(), jitter)
    }
}

/// `|net| / 10 + 0.7 + jitter`, clamped to `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
#[must_use]
pub fn confidence(net_score: f64, jitter: f64) -> f64 {
    (net_score.abs() / NET_SCORE_SCALE + CONFIDENCE_BASE + jitter)
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Label, confidence and the scores behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub label: Label,
    pub confidence: f64,
    pub breakdown: ScoreBreakdown,
}

pub struct Classifier<J: Jitter = SeededJitter> {
    keywords: KeywordSets,
    jitter: J,
}

impl<J: Jitter> Classifier<J> {
    #[must_use]
    pub fn new(jitter: J) -> Self {
        Self::with_keywords(KeywordSets::STANDARD, jitter)
    }

    #[must_use]
    pub fn with_keywords(keywords: KeywordSets, jitter: J) -> Self {
        Self { keywords, jitter }
    }

    /// Scores `text` without touching the jitter source.
    #[must_use]
    pub fn score(&self, text: &str) -> ScoreBreakdown {
        let lower = text.to_lowercase();
        let fake_hits = keywords::matches(&lower, self.keywords.fake);
        let real_hits = keywords::matches(&lower, self.keywords.real);
        let sensational_hits = keywords::matches(&lower, self.keywords.sensational);
        let signals = Signals::detect(text, &lower, sensational_hits.len());

        #[allow(clippy::cast_precision_loss)]
        let fake_score = fake_hits.len() as f64 + signals.fake_bonus();
        #[allow(clippy::cast_precision_loss)]
        let real_score = real_hits.len() as f64 + signals.real_bonus();

        ScoreBreakdown {
            fake_score,
            real_score,
            sensational_score: sensational_hits.len(),
            word_count: signals::word_count(text),
            fake_hits,
            real_hits,
            sensational_hits,
            signals,
        }
    }

    /// Scores `text` and draws one jitter sample for its confidence.
    pub fn classify(&mut self, text: &str) -> Verdict {
        let breakdown = self.score(text);
        let confidence = breakdown.confidence_with(self.jitter.sample());
        Verdict {
            label: breakdown.label(),
            confidence,
            breakdown,
        }
    }

    /// Classifies records in order, numbering results from 1.
    pub fn classify_batch(&mut self, records: Vec<Record>) -> Batch {
        let results: Vec<ClassificationResult> = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let verdict = self.classify(&record.combined_text());
                debug!(
                    id = idx + 1,
                    label = %verdict.label,
                    confidence = verdict.confidence,
                    net = verdict.breakdown.net_score(),
                    "classified"
                );
                ClassificationResult {
                    id: idx + 1,
                    title: record.title,
                    body: record.body,
                    label: verdict.label,
                    confidence: verdict.confidence,
                }
            })
            .collect();

        let fake = results.iter().filter(|r| r.label == Label::Fake).count();
        info!(records = results.len(), fake, "batch classified");
        Batch::new(results)
    }
}

impl Classifier<SeededJitter> {
    /// Production classifier; `seed` fixes the jitter sequence when given.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(SeededJitter::from_seed_option(seed))
    }
}
