use crate::error::EvalError;

/// CTC greedy decode over a batch of frame probabilities.
///
/// `probs` is batch x time x classes (logits or probabilities, only relative
/// order matters), padded along time; `valid_lens` gives the real frame count
/// per utterance. Frames beyond the valid length are ignored entirely,
/// including for shape validation.
///
/// Per utterance: argmax each frame (ties break to the lowest class index),
/// collapse consecutive repeats, drop blanks. An all-blank utterance decodes
/// to an empty sequence.
pub fn ctc_greedy_decode(
    probs: &[Vec<Vec<f32>>],
    valid_lens: &[usize],
    blank_id: usize,
) -> Result<Vec<Vec<usize>>, EvalError> {
    if probs.len() != valid_lens.len() {
        return Err(EvalError::invalid_input(format!(
            "batch size mismatch: {} probability tensors vs {} valid lengths",
            probs.len(),
            valid_lens.len()
        )));
    }

    let mut decoded = Vec::with_capacity(probs.len());
    for (utt_idx, (frames, &valid_len)) in probs.iter().zip(valid_lens).enumerate() {
        if valid_len > frames.len() {
            return Err(EvalError::invalid_input(format!(
                "utterance {utt_idx}: valid length {valid_len} exceeds {} frames",
                frames.len()
            )));
        }

        let frames = &frames[..valid_len];
        let class_count = frames.first().map(Vec::len).unwrap_or(0);
        if valid_len > 0 {
            if class_count == 0 {
                return Err(EvalError::invalid_input(format!(
                    "utterance {utt_idx}: empty class dimension"
                )));
            }
            if blank_id >= class_count {
                return Err(EvalError::invalid_input(format!(
                    "blank id {blank_id} out of range for {class_count} classes"
                )));
            }
        }

        let mut path = Vec::with_capacity(valid_len);
        for (frame_idx, row) in frames.iter().enumerate() {
            if row.len() != class_count {
                return Err(EvalError::invalid_input(format!(
                    "utterance {utt_idx}: frame {frame_idx} has {} classes, expected {class_count}",
                    row.len()
                )));
            }
            path.push(argmax(row));
        }

        decoded.push(collapse_ctc(&path, blank_id));
    }

    Ok(decoded)
}

/// Standard CTC collapsing on an argmax path: merge consecutive repeats, then
/// remove blanks. A label repeated across a blank is emitted twice.
pub fn collapse_ctc(frames: &[usize], blank_id: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut prev = None;
    for &class in frames {
        if prev != Some(class) && class != blank_id {
            out.push(class);
        }
        prev = Some(class);
    }
    out
}

/// Ties break to the lowest class index, keeping decodes reproducible.
fn argmax(row: &[f32]) -> usize {
    let mut best = 0usize;
    for (idx, &p) in row.iter().enumerate().skip(1) {
        if p > row[best] {
            best = idx;
        }
    }
    best
}
