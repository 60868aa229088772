use crate::decoding::greedy::ctc_greedy_decode;
use crate::error::EvalError;
use crate::pipeline::traits::{Decoder, Scorer};
use crate::scoring::edit_distance::edit_details_for_batch;
use crate::types::{BatchScore, Utterance};

pub struct GreedyDecoder;

impl Decoder for GreedyDecoder {
    fn decode(
        &self,
        probs: &[Vec<Vec<f32>>],
        valid_lens: &[usize],
        blank_id: usize,
    ) -> Result<Vec<Vec<usize>>, EvalError> {
        ctc_greedy_decode(probs, valid_lens, blank_id)
    }
}

pub struct EditDistanceScorer;

impl Scorer for EditDistanceScorer {
    fn score(&self, refs: &[Utterance], hyps: &[Utterance]) -> Result<BatchScore, EvalError> {
        edit_details_for_batch(refs, hyps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_decoder_matches_free_function() {
        let decoder = GreedyDecoder;
        let frames = vec![
            vec![1.0f32, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ];
        let batch = vec![frames];
        let decoded = decoder.decode(&batch, &[4], 0).unwrap();
        let expected = ctc_greedy_decode(&batch, &[4], 0).unwrap();
        assert_eq!(decoded, expected);
        assert_eq!(decoded, vec![vec![1, 2]]);
    }

    #[test]
    fn edit_distance_scorer_matches_free_function() {
        let scorer = EditDistanceScorer;
        let refs = vec![Utterance::new("u1", vec![1, 2, 3])];
        let hyps = vec![Utterance::new("u1", vec![1, 3])];
        let batch = scorer.score(&refs, &hyps).unwrap();
        let expected = edit_details_for_batch(&refs, &hyps).unwrap();
        assert_eq!(batch, expected);
        assert_eq!(batch.error_rate(), Some(1.0 / 3.0));
    }
}
