#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: String,
    pub tokens: Vec<usize>,
}

impl Utterance {
    pub fn new(id: impl Into<String>, tokens: Vec<usize>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }
}

/// Operation counts along one minimum-cost alignment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOpCounts {
    pub insertions: usize,
    pub deletions: usize,
    pub substitutions: usize,
}

impl EditOpCounts {
    pub fn total(&self) -> usize {
        self.insertions + self.deletions + self.substitutions
    }

    pub(crate) fn accumulate(&mut self, other: &EditOpCounts) {
        self.insertions += other.insertions;
        self.deletions += other.deletions;
        self.substitutions += other.substitutions;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtteranceScore {
    pub id: String,
    pub counts: EditOpCounts,
    pub ref_len: usize,
}

impl UtteranceScore {
    /// (insertions + deletions + substitutions) / reference length.
    /// `None` when the reference is empty, since the rate is undefined there.
    pub fn error_rate(&self) -> Option<f64> {
        if self.ref_len == 0 {
            return None;
        }
        Some(self.counts.total() as f64 / self.ref_len as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchScore {
    pub utterances: Vec<UtteranceScore>,
}

impl BatchScore {
    /// Summed counts and reference length over utterances with a non-empty
    /// reference. Empty-reference utterances keep their per-utterance counts in
    /// `utterances` but are left out of the pool on both sides of the division.
    pub fn pooled(&self) -> (EditOpCounts, usize) {
        let mut counts = EditOpCounts::default();
        let mut ref_len = 0usize;
        for score in self.utterances.iter().filter(|s| s.ref_len > 0) {
            counts.accumulate(&score.counts);
            ref_len += score.ref_len;
        }
        (counts, ref_len)
    }

    /// Pooled error rate: counts are summed across the batch before dividing
    /// once, so long utterances weigh more than short ones. `None` when every
    /// reference in the batch is empty.
    pub fn error_rate(&self) -> Option<f64> {
        let (counts, ref_len) = self.pooled();
        if ref_len == 0 {
            return None;
        }
        Some(counts.total() as f64 / ref_len as f64)
    }

    /// Utterances excluded from the pooled rate because their reference is empty.
    pub fn skipped(&self) -> usize {
        self.utterances.iter().filter(|s| s.ref_len == 0).count()
    }
}

/// One evaluation batch as handed over by the model forward pass and the data
/// loader: per-utterance frame probabilities and padded reference labels, each
/// with a parallel valid-length array.
#[derive(Debug, Clone)]
pub struct EvalBatch {
    pub ids: Vec<String>,
    /// batch x time x classes, padded along time to the longest utterance.
    pub probs: Vec<Vec<Vec<f32>>>,
    pub prob_lens: Vec<usize>,
    /// batch x max label length, padded reference label rows.
    pub refs: Vec<Vec<usize>>,
    pub ref_lens: Vec<usize>,
}
