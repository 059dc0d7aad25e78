//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production values. `#[serde(default)]` allows partial
//! JSON — missing fields get their default value during deserialization.

use serde::{Deserialize, Serialize};

/// Root settings type for the sema intent engine.
///
/// Loaded from `~/.sema/settings.json` with defaults applied for missing
/// fields. Environment variables (`SEMA_*`) can override specific values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemaSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Intent pipeline settings (bundle location, threading).
    pub pipeline: PipelineSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for SemaSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "sema".to_string(),
            pipeline: PipelineSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Intent pipeline settings.
///
/// The bundle directory holds the packaged classifier artifact and its two
/// JSON side-tables. All three are read-only after startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineSettings {
    /// Directory containing the model bundle (may contain `~`).
    pub bundle_dir: String,
    /// Classifier artifact file name within the bundle.
    pub model_file: String,
    /// Tokenizer side-table file name (word → id mapping).
    pub tokenizer_file: String,
    /// Label side-table file name (ordered class list).
    pub labels_file: String,
    /// Intra-op thread count for the inference session.
    pub intra_threads: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            bundle_dir: "~/.sema/bundle".to_string(),
            model_file: "intent_classifier.onnx".to_string(),
            tokenizer_file: "tokenizer.json".to_string(),
            labels_file: "label_encoder.json".to_string(),
            intra_threads: 2,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level emitted by the tracing subscriber.
    pub level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

/// Log verbosity levels, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-request token sequences.
    Trace,
    /// Per-request pipeline steps.
    Debug,
    /// Startup, readiness, and lifecycle transitions.
    Info,
    /// Recoverable problems (ignored env overrides, transient failures).
    Warn,
    /// Fatal configuration problems.
    Error,
}

impl LogLevel {
    /// The `tracing_subscriber` env-filter directive for this level.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_production_values() {
        let s = SemaSettings::default();
        assert_eq!(s.version, "0.1.0");
        assert_eq!(s.name, "sema");
        assert_eq!(s.pipeline.bundle_dir, "~/.sema/bundle");
        assert_eq!(s.pipeline.model_file, "intent_classifier.onnx");
        assert_eq!(s.pipeline.tokenizer_file, "tokenizer.json");
        assert_eq!(s.pipeline.labels_file, "label_encoder.json");
        assert_eq!(s.pipeline.intra_threads, 2);
        assert_eq!(s.logging.level, LogLevel::Info);
    }

    #[test]
    fn serde_camel_case() {
        let s = SemaSettings::default();
        let value: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert!(value["pipeline"].get("bundleDir").is_some());
        assert!(value["pipeline"].get("intraThreads").is_some());
        assert!(value["pipeline"].get("bundle_dir").is_none());
    }

    #[test]
    fn partial_json_gets_defaults() {
        let json = r#"{"pipeline": {"intraThreads": 4}}"#;
        let s: SemaSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.pipeline.intra_threads, 4);
        assert_eq!(s.pipeline.bundle_dir, "~/.sema/bundle");
        assert_eq!(s.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_lowercase_wire_format() {
        let level: LogLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), r#""warn""#);
    }

    #[test]
    fn log_level_filter_strings() {
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn serde_roundtrip() {
        let s = SemaSettings::default();
        let json = serde_json::to_string(&s).unwrap();
        let parsed: SemaSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pipeline.model_file, s.pipeline.model_file);
        assert_eq!(parsed.logging.level, s.logging.level);
    }
}
