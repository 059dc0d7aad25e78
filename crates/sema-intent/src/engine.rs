//! Inference engine boundary.
//!
//! The classifier is an opaque capability: given a float vector of length
//! [`MAX_LEN`](crate::encoder::MAX_LEN), return one score per label. The
//! production implementation runs a packaged ONNX artifact via `ort`;
//! tests substitute [`FixedScoringEngine`].
//!
//! ONNX tensor shapes use `i64` dimensions while Rust indexing needs
//! `usize`. These casts are safe because tensor dimensions here are always
//! small positive values.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ort::session::Session;
use ort::value::Tensor;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::encoder::MAX_LEN;
use crate::errors::{IntentError, Result, ResultExt};

/// A classifier scoring backend.
///
/// Implementations must serialize their own invocations; callers may hold a
/// shared reference from multiple threads.
pub trait ScoringEngine: Send + Sync {
    /// Score a fixed-length input vector, returning one score per label.
    fn score(&self, input: &[f32]) -> Result<Vec<f32>>;

    /// Input vector length the engine expects.
    fn input_len(&self) -> usize;

    /// Output vector length, when the engine can report it without running.
    fn output_len(&self) -> Option<usize> {
        None
    }
}

/// ONNX-backed scoring engine.
///
/// The session sits behind a `Mutex` since `Session::run` requires `&mut`;
/// this also enforces a single in-flight invocation per engine instance.
/// The session is released when the engine is dropped.
#[derive(Debug)]
pub struct OnnxScoringEngine {
    session: Mutex<Session>,
}

impl OnnxScoringEngine {
    /// Load the classifier artifact from `model_path`.
    ///
    /// A missing or corrupt artifact is a configuration error; the caller
    /// treats it as fatal to the pipeline instance.
    pub fn load(model_path: &Path, intra_threads: usize) -> Result<Self> {
        if !model_path.exists() {
            return Err(IntentError::Config(format!(
                "classifier artifact not found: {}",
                model_path.display()
            )));
        }

        let session = Session::builder()
            .config("session builder")?
            .with_intra_threads(intra_threads)
            .config("set threads")?
            .with_log_level(ort::logging::LogLevel::Warning)
            .config("set log level")?
            .commit_from_file(model_path)
            .config("load classifier")?;

        info!(model = %model_path.display(), "classifier artifact loaded");
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl ScoringEngine for OnnxScoringEngine {
    fn score(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.len() != MAX_LEN {
            return Err(IntentError::Config(format!(
                "engine input length {} != {MAX_LEN}",
                input.len()
            )));
        }

        let tensor = Tensor::from_array(([1i64, input.len() as i64], input.to_vec()))
            .inference("input tensor")?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![tensor])
            .inference("session run")?;

        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .inference("extract scores")?;

        let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
        if dims.len() != 2 || dims[0] != 1 {
            return Err(IntentError::Inference(format!(
                "unexpected output shape: {dims:?}"
            )));
        }

        debug!(scores = dims[1], "classifier invoked");
        Ok(data.to_vec())
    }

    fn input_len(&self) -> usize {
        MAX_LEN
    }
}

/// Scoring engine test double returning a preset score vector.
///
/// Counts invocations so tests can assert the engine was (or was not)
/// called, and can be flipped into a failing mode to exercise per-request
/// error paths.
pub struct FixedScoringEngine {
    scores: Vec<f32>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FixedScoringEngine {
    /// Create an engine that always returns `scores`.
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Number of successful or failed `score` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make subsequent invocations fail with an inference error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl ScoringEngine for FixedScoringEngine {
    fn score(&self, _input: &[f32]) -> Result<Vec<f32>> {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(IntentError::Inference("synthetic engine failure".into()));
        }
        Ok(self.scores.clone())
    }

    fn input_len(&self) -> usize {
        MAX_LEN
    }

    fn output_len(&self) -> Option<usize> {
        Some(self.scores.len())
    }
}
