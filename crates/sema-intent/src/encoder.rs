//! Fixed-length sequence encoding.
//!
//! The classifier was trained on sequences of exactly [`MAX_LEN`] token
//! ids: shorter inputs are right-padded with [`PAD_ID`], longer inputs are
//! truncated at the tail. Encoding has no error conditions — any string,
//! including the empty one, produces a valid sequence.

use crate::vocab::Vocabulary;

/// Fixed input sequence length the classifier was trained on.
pub const MAX_LEN: usize = 50;

/// Padding id for positions past the end of the token sequence.
pub const PAD_ID: u32 = 0;

/// Encode normalized text into exactly [`MAX_LEN`] token ids.
///
/// Words are whitespace-separated; a fully-trimmed empty string yields
/// zero words (all padding), not a single empty-string lookup. Unknown
/// words encode to the vocabulary's OOV sentinel.
pub fn encode(text: &str, vocab: &Vocabulary) -> Vec<u32> {
    let mut sequence = vec![PAD_ID; MAX_LEN];
    for (slot, word) in sequence.iter_mut().zip(text.split_whitespace()) {
        *slot = vocab.token_id(word);
    }
    sequence
}

/// Convert an encoded sequence into the classifier's f32 input layout.
#[allow(clippy::cast_precision_loss)]
pub fn to_model_input(sequence: &[u32]) -> Vec<f32> {
    sequence.iter().map(|&id| id as f32).collect()
}
