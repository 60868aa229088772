use crate::decoding::depad::undo_padding;
use crate::error::EvalError;
use crate::pipeline::traits::{Decoder, Scorer};
use crate::types::{BatchScore, EvalBatch, Utterance};

/// Per-batch evaluation pipeline: decode hypothesis probabilities, depad the
/// padded reference labels, pair both sides by utterance id and score.
///
/// Results are explicit return values; the evaluator holds no mutable state
/// between batches, so one instance can be shared across threads.
pub struct BatchEvaluator {
    blank_id: usize,
    decoder: Box<dyn Decoder>,
    scorer: Box<dyn Scorer>,
}

pub(crate) struct BatchEvaluatorParts {
    pub blank_id: usize,
    pub decoder: Box<dyn Decoder>,
    pub scorer: Box<dyn Scorer>,
}

impl BatchEvaluator {
    pub(crate) fn from_parts(parts: BatchEvaluatorParts) -> Self {
        Self {
            blank_id: parts.blank_id,
            decoder: parts.decoder,
            scorer: parts.scorer,
        }
    }

    pub fn blank_id(&self) -> usize {
        self.blank_id
    }

    pub fn evaluate(&self, batch: &EvalBatch) -> Result<BatchScore, EvalError> {
        if batch.ids.len() != batch.probs.len() || batch.ids.len() != batch.refs.len() {
            return Err(EvalError::invalid_input(format!(
                "batch size mismatch: {} ids vs {} probability tensors vs {} reference rows",
                batch.ids.len(),
                batch.probs.len(),
                batch.refs.len()
            )));
        }

        let hyp_tokens = self
            .decoder
            .decode(&batch.probs, &batch.prob_lens, self.blank_id)?;
        let ref_tokens = undo_padding(&batch.refs, &batch.ref_lens)?;

        let refs: Vec<Utterance> = batch
            .ids
            .iter()
            .zip(ref_tokens)
            .map(|(id, tokens)| Utterance::new(id.clone(), tokens))
            .collect();
        let hyps: Vec<Utterance> = batch
            .ids
            .iter()
            .zip(hyp_tokens)
            .map(|(id, tokens)| Utterance::new(id.clone(), tokens))
            .collect();

        let score = self.scorer.score(&refs, &hyps)?;

        let (counts, ref_len) = score.pooled();
        tracing::debug!(
            utterances = score.utterances.len(),
            insertions = counts.insertions,
            deletions = counts.deletions,
            substitutions = counts.substitutions,
            ref_len,
            skipped = score.skipped(),
            "batch scored"
        );

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvalConfig;
    use crate::pipeline::builder::BatchEvaluatorBuilder;

    fn one_hot_frames(path: &[usize], classes: usize) -> Vec<Vec<f32>> {
        path.iter()
            .map(|&c| {
                let mut row = vec![0.0f32; classes];
                row[c] = 1.0;
                row
            })
            .collect()
    }

    #[test]
    fn evaluate_decodes_depads_and_scores() {
        let evaluator = BatchEvaluatorBuilder::new(EvalConfig::default()).build();
        // decodes to [1, 2]; reference depads to [1, 2, 3] -> one deletion
        let batch = EvalBatch {
            ids: vec!["u1".to_string()],
            probs: vec![one_hot_frames(&[0, 1, 1, 0, 2, 2, 2, 0], 4)],
            prob_lens: vec![8],
            refs: vec![vec![1, 2, 3, 0, 0]],
            ref_lens: vec![3],
        };
        let score = evaluator.evaluate(&batch).unwrap();
        assert_eq!(score.utterances[0].counts.deletions, 1);
        assert_eq!(score.error_rate(), Some(1.0 / 3.0));
    }

    #[test]
    fn evaluate_rejects_id_count_mismatch() {
        let evaluator = BatchEvaluatorBuilder::new(EvalConfig::default()).build();
        let batch = EvalBatch {
            ids: vec!["u1".to_string(), "u2".to_string()],
            probs: vec![one_hot_frames(&[1], 2)],
            prob_lens: vec![1],
            refs: vec![vec![1]],
            ref_lens: vec![1],
        };
        let result = evaluator.evaluate(&batch);
        assert!(matches!(result, Err(EvalError::InvalidInput { .. })));
    }

    #[test]
    fn evaluate_propagates_decoder_validation() {
        let evaluator = BatchEvaluatorBuilder::new(EvalConfig::default()).build();
        let batch = EvalBatch {
            ids: vec!["u1".to_string()],
            probs: vec![one_hot_frames(&[1], 2)],
            prob_lens: vec![5],
            refs: vec![vec![1]],
            ref_lens: vec![1],
        };
        let result = evaluator.evaluate(&batch);
        assert!(matches!(result, Err(EvalError::InvalidInput { .. })));
    }
}
