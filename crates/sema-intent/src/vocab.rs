//! Vocabulary and label side-tables.
//!
//! Both tables are parsed once at startup and are immutable afterwards, so
//! they can be shared read-only across any number of concurrent readers.
//! Word ids live in the model's input space; label indices live in its
//! output space. The two must never be conflated — a label is only ever
//! resolved through [`LabelTable`].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::bundle::read_json_resource;
use crate::errors::{IntentError, Result};

/// Token id substituted for words absent from the trained vocabulary.
///
/// The training pipeline assigned `1` to its `<OOV>` bucket. This is kept
/// as-is even though nothing guarantees no real word owns id `1`.
pub const OOV_ID: u32 = 1;

#[derive(Debug, Deserialize)]
struct TokenizerResource {
    word_index: HashMap<String, u32>,
}

#[derive(Debug, Deserialize)]
struct LabelResource {
    classes: Vec<String>,
}

/// Word → token id mapping, fixed at training time.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
}

impl Vocabulary {
    /// Load the vocabulary from a tokenizer side-table file.
    ///
    /// The file must be a JSON object with a `"word_index"` key mapping
    /// words to integer ids.
    pub fn load(path: &Path) -> Result<Self> {
        let resource: TokenizerResource = read_json_resource(path)?;
        info!(words = resource.word_index.len(), "vocabulary loaded");
        Ok(Self {
            word_index: resource.word_index,
        })
    }

    /// Build a vocabulary from an in-memory mapping.
    pub fn from_word_index(word_index: HashMap<String, u32>) -> Self {
        Self { word_index }
    }

    /// Token id for a word, or [`OOV_ID`] if the word is unknown.
    pub fn token_id(&self, word: &str) -> u32 {
        self.word_index.get(word).copied().unwrap_or(OOV_ID)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    /// Whether the vocabulary contains no words.
    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }
}

/// Ordered label list; index `i` corresponds to output-vector position `i`.
#[derive(Debug, Clone)]
pub struct LabelTable {
    classes: Vec<String>,
}

impl LabelTable {
    /// Load the label table from a label side-table file.
    ///
    /// The file must be a JSON object with a `"classes"` key holding a
    /// non-empty ordered list of label strings.
    pub fn load(path: &Path) -> Result<Self> {
        let resource: LabelResource = read_json_resource(path)?;
        let table = Self::from_classes(resource.classes)?;
        info!(labels = table.len(), "label table loaded");
        Ok(table)
    }

    /// Build a label table from an in-memory class list.
    pub fn from_classes(classes: Vec<String>) -> Result<Self> {
        if classes.is_empty() {
            return Err(IntentError::Config("label table is empty".into()));
        }
        Ok(Self { classes })
    }

    /// Label at output-vector position `idx`.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.classes.get(idx).map(String::as_str)
    }

    /// Number of labels (the classifier's output dimensionality).
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false: construction rejects empty class lists.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All labels in output order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
