// src/present/stats.rs
use serde::Serialize;

use crate::types::{Batch, Label};

/// Aggregates over the whole batch, not just the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub real_count: usize,
    pub fake_count: usize,
    /// Mean confidence as a percentage (0 for an empty batch).
    pub average_pct: f64,
    pub real_pct: f64,
    pub fake_pct: f64,
}

impl BatchStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(batch: &Batch) -> Self {
        let total = batch.len();
        if total == 0 {
            return Self::default();
        }

        let real_count = batch.iter().filter(|r| r.label == Label::Real).count();
        let fake_count = total - real_count;
        let confidence_sum: f64 = batch.iter().map(|r| r.confidence).sum();

        let pct = |part: f64| part / total as f64 * 100.0;
        Self {
            total,
            real_count,
            fake_count,
            average_pct: pct(confidence_sum),
            real_pct: pct(real_count as f64),
            fake_pct: pct(fake_count as f64),
        }
    }
}
