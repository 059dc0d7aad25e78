//! Decision layer — score vector to labeled prediction.

use crate::errors::{IntentError, Result};
use crate::types::Prediction;
use crate::vocab::LabelTable;

/// Select the winning label from a classifier score vector.
///
/// The confidence is the raw score at the winning index — scores are taken
/// as the classifier emitted them, with no further normalization. A length
/// mismatch between scores and labels is a configuration error, never a
/// silent truncation.
pub fn decide(scores: &[f32], labels: &LabelTable) -> Result<Prediction> {
    if scores.len() != labels.len() {
        return Err(IntentError::Config(format!(
            "classifier emitted {} scores for {} labels",
            scores.len(),
            labels.len()
        )));
    }

    let winner = argmax(scores);
    let label = labels
        .get(winner)
        .ok_or_else(|| IntentError::Config(format!("no label at index {winner}")))?;

    Ok(Prediction {
        label: label.to_string(),
        confidence: scores[winner],
    })
}

/// Index of the maximum value; ties break toward the first occurrence.
fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}
