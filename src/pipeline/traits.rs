use crate::error::EvalError;
use crate::types::{BatchScore, Utterance};

pub trait Decoder: Send + Sync {
    fn decode(
        &self,
        probs: &[Vec<Vec<f32>>],
        valid_lens: &[usize],
        blank_id: usize,
    ) -> Result<Vec<Vec<usize>>, EvalError>;
}

pub trait Scorer: Send + Sync {
    fn score(&self, refs: &[Utterance], hyps: &[Utterance]) -> Result<BatchScore, EvalError>;
}
