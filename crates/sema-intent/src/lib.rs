//! # sema-intent
//!
//! On-device intent prediction pipeline backed by a pre-trained ONNX text
//! classifier and two JSON side-tables (word index, label classes).
//!
//! # Architecture
//!
//! ```text
//! raw text → clean_text (lower-case, trim, spelling fixes)
//! → encode (word → id, OOV → 1, pad/truncate to 50)
//! → intent_classifier.onnx → scores [1, N]
//! → argmax + label_encoder.json lookup → Prediction { label, confidence }
//! ```
//!
//! The classifier artifact is opaque: a float vector of length 50 in, one
//! score per label out. [`pipeline::IntentPipeline`] owns the lifecycle
//! (`Uninitialized → Loading → Ready | Failed`) and serves synchronous
//! predictions once ready.

#![deny(unsafe_code)]

pub mod bundle;
pub mod config;
pub mod decision;
pub mod encoder;
pub mod engine;
pub mod errors;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod vocab;

pub use bundle::BundlePaths;
pub use config::PipelineConfig;
pub use encoder::{MAX_LEN, PAD_ID};
pub use engine::{FixedScoringEngine, OnnxScoringEngine, ScoringEngine};
pub use errors::{IntentError, Result};
pub use normalize::clean_text;
pub use pipeline::{IntentPipeline, PipelineState};
pub use types::Prediction;
pub use vocab::{LabelTable, OOV_ID, Vocabulary};
