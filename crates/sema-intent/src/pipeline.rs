//! Pipeline lifecycle and the prediction entry point.
//!
//! Lifecycle: `Uninitialized → Loading → Ready` on a successful load of the
//! classifier artifact and both side-tables; `Loading → Failed` on any load
//! error. `Failed` is terminal until the caller explicitly re-initializes.
//! Requests while not `Ready` return [`IntentError::NotReady`] immediately
//! without touching the engine.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, info};

use crate::bundle::BundlePaths;
use crate::config::PipelineConfig;
use crate::decision;
use crate::encoder;
use crate::engine::{OnnxScoringEngine, ScoringEngine};
use crate::errors::{IntentError, Result};
use crate::normalize;
use crate::types::Prediction;
use crate::vocab::{LabelTable, Vocabulary};

/// Externally observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Created, nothing loaded yet.
    Uninitialized,
    /// An `initialize` call is in flight.
    Loading,
    /// Serving predictions.
    Ready,
    /// A load or configuration failure; terminal until re-initialized.
    Failed,
}

/// Everything a prediction needs, built once at load time and read-only
/// afterwards.
struct ReadyState {
    engine: Arc<dyn ScoringEngine>,
    vocab: Vocabulary,
    labels: LabelTable,
}

enum Lifecycle {
    Uninitialized,
    Loading,
    Ready(ReadyState),
    Failed(String),
}

/// The intent prediction pipeline.
///
/// Owns the engine handle and both side-tables; everything is released when
/// the pipeline is dropped or re-initialized. Prediction is synchronous and
/// the engine serializes its own invocations, so a shared `IntentPipeline`
/// is safe to call from multiple threads.
pub struct IntentPipeline {
    config: PipelineConfig,
    state: RwLock<Lifecycle>,
}

impl IntentPipeline {
    /// Create a pipeline in the `Uninitialized` state.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: RwLock::new(Lifecycle::Uninitialized),
        }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        match *self.state.read() {
            Lifecycle::Uninitialized => PipelineState::Uninitialized,
            Lifecycle::Loading => PipelineState::Loading,
            Lifecycle::Ready(_) => PipelineState::Ready,
            Lifecycle::Failed(_) => PipelineState::Failed,
        }
    }

    /// The failure message, when the pipeline is in the `Failed` state.
    pub fn failure(&self) -> Option<String> {
        match &*self.state.read() {
            Lifecycle::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    /// Labels in output order, once the pipeline is ready.
    pub fn labels(&self) -> Option<Vec<String>> {
        match &*self.state.read() {
            Lifecycle::Ready(ready) => Some(ready.labels.classes().to_vec()),
            _ => None,
        }
    }

    /// Load the classifier artifact and both side-tables from the bundle.
    ///
    /// Blocking; call once before serving predictions. On failure the
    /// pipeline lands in `Failed` and the error is returned; calling again
    /// retries the full load.
    pub fn initialize(&self) -> Result<()> {
        *self.state.write() = Lifecycle::Loading;
        match self.load_bundle() {
            Ok(ready) => {
                info!(
                    words = ready.vocab.len(),
                    labels = ready.labels.len(),
                    "intent pipeline ready"
                );
                *self.state.write() = Lifecycle::Ready(ready);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "intent pipeline initialization failed");
                *self.state.write() = Lifecycle::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Initialize with an explicit engine and side-tables.
    ///
    /// Lets embedders supply their own [`ScoringEngine`]; the bundle on
    /// disk is not consulted. The label count is validated against the
    /// engine's reported output dimensionality when available.
    pub fn initialize_with(
        &self,
        engine: Arc<dyn ScoringEngine>,
        vocab: Vocabulary,
        labels: LabelTable,
    ) -> Result<()> {
        *self.state.write() = Lifecycle::Loading;
        let ready = ReadyState {
            engine,
            vocab,
            labels,
        };
        match validate_dimensions(&ready) {
            Ok(()) => {
                info!(
                    words = ready.vocab.len(),
                    labels = ready.labels.len(),
                    "intent pipeline ready"
                );
                *self.state.write() = Lifecycle::Ready(ready);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "intent pipeline initialization failed");
                *self.state.write() = Lifecycle::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn load_bundle(&self) -> Result<ReadyState> {
        let paths = BundlePaths::resolve(&self.config);
        let missing = paths.missing_files();
        if !missing.is_empty() {
            let listing: Vec<String> = missing
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            return Err(IntentError::Config(format!(
                "bundle incomplete, missing: {}",
                listing.join(", ")
            )));
        }

        let vocab = Vocabulary::load(&paths.tokenizer)?;
        let labels = LabelTable::load(&paths.labels)?;
        let engine = OnnxScoringEngine::load(&paths.model, self.config.intra_threads)?;

        let ready = ReadyState {
            engine: Arc::new(engine),
            vocab,
            labels,
        };
        validate_dimensions(&ready)?;
        Ok(ready)
    }

    /// Predict the intent of one input sentence.
    ///
    /// Returns [`IntentError::NotReady`] immediately when the pipeline is
    /// not serving. An engine invocation failure is scoped to this request
    /// and leaves the pipeline `Ready`; a score/label dimension mismatch is
    /// a configuration fault and fails the pipeline instance.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let guard = self.state.read();
        let Lifecycle::Ready(ready) = &*guard else {
            return Err(IntentError::NotReady);
        };

        let cleaned = normalize::clean_text(text);
        let sequence = encoder::encode(&cleaned, &ready.vocab);
        let input = encoder::to_model_input(&sequence);

        let scores = ready.engine.score(&input)?;

        match decision::decide(&scores, &ready.labels) {
            Ok(prediction) => {
                debug!(
                    label = %prediction.label,
                    confidence = prediction.confidence,
                    "prediction served"
                );
                Ok(prediction)
            }
            Err(e @ IntentError::Config(_)) => {
                error!(error = %e, "classifier output disagrees with label table");
                drop(guard);
                *self.state.write() = Lifecycle::Failed(e.to_string());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

/// Check the label table against the engine's output dimensionality.
///
/// Engines with dynamic output shapes report `None`; for those the check
/// happens on the first prediction instead.
fn validate_dimensions(ready: &ReadyState) -> Result<()> {
    if let Some(out) = ready.engine.output_len() {
        if out != ready.labels.len() {
            return Err(IntentError::Config(format!(
                "classifier output dimension {out} != label table length {}",
                ready.labels.len()
            )));
        }
    }
    Ok(())
}
