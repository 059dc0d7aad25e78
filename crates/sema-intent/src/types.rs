//! Core types for the intent pipeline.

use serde::Serialize;

/// Result of predicting the intent of one input sentence.
///
/// Computed fresh per request; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// The predicted intent label.
    pub label: String,
    /// Raw score of the selected label, in `[0, 1]` for a softmax head.
    pub confidence: f32,
}
