use crate::config::EvalConfig;
use crate::pipeline::defaults::{EditDistanceScorer, GreedyDecoder};
use crate::pipeline::runtime::{BatchEvaluator, BatchEvaluatorParts};
use crate::pipeline::traits::{Decoder, Scorer};

/// Assembles a [`BatchEvaluator`] once at startup. Decoder and scorer are
/// injectable seams; the defaults are greedy decode and Levenshtein scoring.
pub struct BatchEvaluatorBuilder {
    config: EvalConfig,
    decoder: Option<Box<dyn Decoder>>,
    scorer: Option<Box<dyn Scorer>>,
}

impl BatchEvaluatorBuilder {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            decoder: None,
            scorer: None,
        }
    }

    pub fn with_decoder(mut self, decoder: Box<dyn Decoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn build(self) -> BatchEvaluator {
        BatchEvaluator::from_parts(BatchEvaluatorParts {
            blank_id: self.config.blank_id,
            decoder: self.decoder.unwrap_or_else(|| Box::new(GreedyDecoder)),
            scorer: self.scorer.unwrap_or_else(|| Box::new(EditDistanceScorer)),
        })
    }
}
