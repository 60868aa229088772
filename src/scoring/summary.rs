use crate::types::{BatchScore, EditOpCounts};

/// Mean of per-batch scalars (typically losses). `None` for an empty epoch.
pub fn summarize_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Running pooled error rate across batches.
///
/// Counts and reference lengths are summed as batches arrive and divided once
/// at the end, so the epoch rate is the same as scoring the whole epoch as a
/// single batch. Empty-reference utterances are excluded from both sides of
/// the division and tallied in `skipped`.
#[derive(Debug, Clone, Default)]
pub struct ErrorRateAccumulator {
    counts: EditOpCounts,
    ref_len: usize,
    skipped: usize,
}

impl ErrorRateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_batch(&mut self, batch: &BatchScore) {
        let (counts, ref_len) = batch.pooled();
        self.counts.accumulate(&counts);
        self.ref_len += ref_len;
        self.skipped += batch.skipped();
    }

    pub fn counts(&self) -> EditOpCounts {
        self.counts
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// `None` until at least one non-empty reference has been scored.
    pub fn error_rate(&self) -> Option<f64> {
        if self.ref_len == 0 {
            return None;
        }
        Some(self.counts.total() as f64 / self.ref_len as f64)
    }
}
