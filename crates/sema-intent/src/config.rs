//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use sema_settings::PipelineSettings;

/// Configuration for the intent pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Directory containing the model bundle (may contain `~`).
    pub bundle_dir: String,
    /// Classifier artifact file name within the bundle.
    pub model_file: String,
    /// Tokenizer side-table file name.
    pub tokenizer_file: String,
    /// Label side-table file name.
    pub labels_file: String,
    /// Intra-op thread count for the inference session.
    pub intra_threads: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_settings(&PipelineSettings::default())
    }
}

impl PipelineConfig {
    /// Create config from settings.
    pub fn from_settings(s: &PipelineSettings) -> Self {
        Self {
            bundle_dir: s.bundle_dir.clone(),
            model_file: s.model_file.clone(),
            tokenizer_file: s.tokenizer_file.clone(),
            labels_file: s.labels_file.clone(),
            intra_threads: s.intra_threads,
        }
    }

    /// Resolve the bundle directory, expanding `~/` to the home directory.
    pub fn resolved_bundle_dir(&self) -> String {
        if self.bundle_dir.starts_with("~/") {
            if let Ok(home) = std::env::var("HOME") {
                return format!("{}{}", home, &self.bundle_dir[1..]);
            }
        }
        self.bundle_dir.clone()
    }
}
