pub mod config;
pub mod decoding;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use config::EvalConfig;
pub use decoding::depad::undo_padding;
pub use decoding::greedy::{collapse_ctc, ctc_greedy_decode};
pub use error::EvalError;
pub use pipeline::builder::BatchEvaluatorBuilder;
pub use pipeline::defaults::{EditDistanceScorer, GreedyDecoder};
pub use pipeline::runtime::BatchEvaluator;
pub use pipeline::traits::{Decoder, Scorer};
pub use scoring::edit_distance::{edit_details_for_batch, edit_distance, edit_ops};
pub use scoring::summary::{summarize_average, ErrorRateAccumulator};
pub use types::{BatchScore, EditOpCounts, EvalBatch, Utterance, UtteranceScore};
