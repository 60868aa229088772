use crate::error::EvalError;
use crate::types::{BatchScore, EditOpCounts, Utterance, UtteranceScore};

/// Minimum edit distance (Levenshtein, unit costs) between two token
/// sequences. Rolling two-row table; use [`edit_ops`] when the operation
/// split is needed.
pub fn edit_distance(reference: &[usize], hypothesis: &[usize]) -> usize {
    let mut prev: Vec<usize> = (0..=hypothesis.len()).collect();
    let mut curr = vec![0usize; hypothesis.len() + 1];

    for (i, &r) in reference.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &h) in hypothesis.iter().enumerate() {
            let sub = prev[j] + usize::from(r != h);
            curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[hypothesis.len()]
}

/// Edit-operation counts along one minimum-cost alignment.
///
/// Several optimal alignments can realize the same total distance with
/// different ins/del/sub splits. Backtracking resolves ties with a fixed
/// precedence, match/substitution first, then deletion, then insertion, so
/// the split is deterministic and reproducible across runs.
pub fn edit_ops(reference: &[usize], hypothesis: &[usize]) -> EditOpCounts {
    let n = reference.len();
    let m = hypothesis.len();
    let width = m + 1;

    let mut cost = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        cost[i * width] = i;
    }
    for j in 1..=m {
        cost[j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let sub = cost[(i - 1) * width + j - 1]
                + usize::from(reference[i - 1] != hypothesis[j - 1]);
            let del = cost[(i - 1) * width + j] + 1;
            let ins = cost[i * width + j - 1] + 1;
            cost[i * width + j] = sub.min(del).min(ins);
        }
    }

    let mut counts = EditOpCounts::default();
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let step = usize::from(reference[i - 1] != hypothesis[j - 1]);
            if cost[(i - 1) * width + j - 1] + step == cost[i * width + j] {
                counts.substitutions += step;
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && cost[(i - 1) * width + j] + 1 == cost[i * width + j] {
            counts.deletions += 1;
            i -= 1;
            continue;
        }
        counts.insertions += 1;
        j -= 1;
    }

    counts
}

/// Score a batch of reference/hypothesis pairs.
///
/// References and hypotheses are paired by position and must carry the same
/// utterance id in the same order; a mismatch means the upstream pipeline
/// shuffled one side and fails the batch rather than scoring garbage.
pub fn edit_details_for_batch(
    refs: &[Utterance],
    hyps: &[Utterance],
) -> Result<BatchScore, EvalError> {
    if refs.len() != hyps.len() {
        return Err(EvalError::invalid_input(format!(
            "batch size mismatch: {} references vs {} hypotheses",
            refs.len(),
            hyps.len()
        )));
    }

    let mut utterances = Vec::with_capacity(refs.len());
    for (reference, hypothesis) in refs.iter().zip(hyps) {
        if reference.id != hypothesis.id {
            return Err(EvalError::misaligned(format!(
                "reference id {:?} paired with hypothesis id {:?}",
                reference.id, hypothesis.id
            )));
        }
        utterances.push(UtteranceScore {
            id: reference.id.clone(),
            counts: edit_ops(&reference.tokens, &hypothesis.tokens),
            ref_len: reference.tokens.len(),
        });
    }

    Ok(BatchScore { utterances })
}
