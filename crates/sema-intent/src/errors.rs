//! Intent pipeline error types.
//!
//! Configuration failures are fatal to a pipeline instance (the caller must
//! re-initialize); inference failures are scoped to a single request.

use thiserror::Error;

/// Errors from intent pipeline operations.
#[derive(Debug, Error)]
pub enum IntentError {
    /// Artifact or side-table missing/malformed, or a dimension mismatch
    /// between the classifier output and the label table.
    #[error("configuration error: {0}")]
    Config(String),

    /// The inference call itself failed. Transient, scoped to one request.
    #[error("prediction failed: {0}")]
    Inference(String),

    /// The pipeline is not in the `Ready` state.
    #[error("intent pipeline not ready")]
    NotReady,

    /// I/O error (file read).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for intent pipeline operations.
pub type Result<T> = std::result::Result<T, IntentError>;

/// Shorthand for mapping foreign errors into domain variants with a
/// call-site context string.
pub(crate) trait ResultExt<T> {
    /// Map any error into [`IntentError::Config`].
    fn config(self, context: &str) -> Result<T>;
    /// Map any error into [`IntentError::Inference`].
    fn inference(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn config(self, context: &str) -> Result<T> {
        self.map_err(|e| IntentError::Config(format!("{context}: {e}")))
    }

    fn inference(self, context: &str) -> Result<T> {
        self.map_err(|e| IntentError::Inference(format!("{context}: {e}")))
    }
}
