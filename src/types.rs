// src/types.rs
use serde::Serialize;
use std::fmt;

/// Binary verdict produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Fake => "Fake",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly the heuristic leans one way, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.8 {
            Self::High
        } else if confidence > 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One data row after column resolution. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    pub body: String,
}

impl Record {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Title and body joined by a single space; the classifier's input.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// A classified article. Immutable once the batch is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub id: usize,
    pub title: String,
    pub body: String,
    pub label: Label,
    pub confidence: f64,
}

impl ClassificationResult {
    #[must_use]
    pub fn confidence_pct(&self) -> f64 {
        self.confidence * 100.0
    }

    #[must_use]
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    /// Words in the body, counted the same way the classifier counts them.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.body.split(' ').count()
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }
}

/// The ordered results of one upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Batch {
    results: Vec<ClassificationResult>,
}

impl Batch {
    #[must_use]
    pub fn new(results: Vec<ClassificationResult>) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassificationResult> {
        self.results.iter()
    }

    /// Looks a result up by its 1-based id.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&ClassificationResult> {
        id.checked_sub(1).and_then(|idx| self.results.get(idx))
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a ClassificationResult;
    type IntoIter = std::slice::Iter<'a, ClassificationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Severity of a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fatal to the current upload.
    Error,
    /// Surfaced alongside results.
    Warning,
}

impl Severity {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
        }
    }
}

/// A message shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub severity: Severity,
    pub message: String,
}

impl ValidationMessage {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
