use crate::error::EvalError;

/// Strip a padded label batch back to per-utterance sequences using the
/// parallel valid-length array.
pub fn undo_padding(
    padded: &[Vec<usize>],
    valid_lens: &[usize],
) -> Result<Vec<Vec<usize>>, EvalError> {
    if padded.len() != valid_lens.len() {
        return Err(EvalError::invalid_input(format!(
            "batch size mismatch: {} padded rows vs {} valid lengths",
            padded.len(),
            valid_lens.len()
        )));
    }

    padded
        .iter()
        .zip(valid_lens)
        .enumerate()
        .map(|(utt_idx, (row, &valid_len))| {
            if valid_len > row.len() {
                return Err(EvalError::invalid_input(format!(
                    "utterance {utt_idx}: valid length {valid_len} exceeds {} labels",
                    row.len()
                )));
            }
            Ok(row[..valid_len].to_vec())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_padding_truncates_to_valid_lengths() {
        let padded = vec![vec![1, 2, 3, 0, 0], vec![4, 0, 0, 0, 0]];
        let depadded = undo_padding(&padded, &[3, 1]).unwrap();
        assert_eq!(depadded, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn undo_padding_keeps_empty_rows() {
        let padded = vec![vec![7, 7], vec![1, 2]];
        let depadded = undo_padding(&padded, &[0, 2]).unwrap();
        assert_eq!(depadded, vec![Vec::new(), vec![1, 2]]);
    }

    #[test]
    fn undo_padding_rejects_length_array_mismatch() {
        let result = undo_padding(&[vec![1]], &[1, 1]);
        assert!(matches!(result, Err(EvalError::InvalidInput { .. })));
    }

    #[test]
    fn undo_padding_rejects_valid_length_beyond_row() {
        let result = undo_padding(&[vec![1, 2]], &[3]);
        assert!(matches!(result, Err(EvalError::InvalidInput { .. })));
    }
}
