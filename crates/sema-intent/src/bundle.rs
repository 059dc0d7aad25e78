//! Model bundle path resolution and resource reads.
//!
//! A bundle is a directory holding the packaged classifier artifact plus its
//! two JSON side-tables. All three are bundled at build/deploy time and are
//! read-only; there is no download path.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::PipelineConfig;
use crate::errors::{IntentError, Result};

/// Resolved paths to the three bundle files.
#[derive(Debug, Clone)]
pub struct BundlePaths {
    /// Classifier artifact.
    pub model: PathBuf,
    /// Tokenizer side-table (`word_index`).
    pub tokenizer: PathBuf,
    /// Label side-table (`classes`).
    pub labels: PathBuf,
}

impl BundlePaths {
    /// Resolve bundle file paths from the pipeline config.
    pub fn resolve(config: &PipelineConfig) -> Self {
        let dir = PathBuf::from(config.resolved_bundle_dir());
        Self {
            model: dir.join(&config.model_file),
            tokenizer: dir.join(&config.tokenizer_file),
            labels: dir.join(&config.labels_file),
        }
    }

    /// All files the bundle must contain.
    pub fn required_files(&self) -> [&Path; 3] {
        [
            self.model.as_path(),
            self.tokenizer.as_path(),
            self.labels.as_path(),
        ]
    }

    /// Files from [`Self::required_files`] that are absent on disk.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        self.required_files()
            .into_iter()
            .filter(|p| !p.exists())
            .map(Path::to_path_buf)
            .collect()
    }

    /// Whether every required bundle file exists locally.
    pub fn is_complete(&self) -> bool {
        self.missing_files().is_empty()
    }
}

/// Read and parse a JSON side-table into a typed structure.
///
/// Shape mismatches (missing key, wrong value type) are configuration
/// errors, never silently defaulted.
pub fn read_json_resource<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        IntentError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        IntentError::Config(format!("malformed resource {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_in(dir: &Path) -> BundlePaths {
        let config = PipelineConfig {
            bundle_dir: dir.to_string_lossy().into_owned(),
            ..PipelineConfig::default()
        };
        BundlePaths::resolve(&config)
    }

    #[test]
    fn resolve_joins_configured_names() {
        let paths = paths_in(Path::new("/opt/sema/bundle"));
        assert_eq!(
            paths.model,
            PathBuf::from("/opt/sema/bundle/intent_classifier.onnx")
        );
        assert_eq!(
            paths.tokenizer,
            PathBuf::from("/opt/sema/bundle/tokenizer.json")
        );
        assert_eq!(
            paths.labels,
            PathBuf::from("/opt/sema/bundle/label_encoder.json")
        );
    }

    #[test]
    fn empty_dir_is_incomplete() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = paths_in(tmp.path());
        assert!(!paths.is_complete());
        assert_eq!(paths.missing_files().len(), 3);
    }

    #[test]
    fn complete_after_all_files_present() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = paths_in(tmp.path());
        for p in paths.required_files() {
            std::fs::write(p, b"x").unwrap();
        }
        assert!(paths.is_complete());
        assert!(paths.missing_files().is_empty());
    }

    #[test]
    fn missing_files_reports_only_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = paths_in(tmp.path());
        std::fs::write(&paths.tokenizer, b"{}").unwrap();
        let missing = paths.missing_files();
        assert_eq!(missing.len(), 2);
        assert!(!missing.contains(&paths.tokenizer));
    }

    #[test]
    fn read_json_resource_typed() {
        #[derive(serde::Deserialize)]
        struct Doc {
            classes: Vec<String>,
        }
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(&path, r#"{"classes": ["a", "b"]}"#).unwrap();
        let doc: Doc = read_json_resource(&path).unwrap();
        assert_eq!(doc.classes, vec!["a", "b"]);
    }

    #[test]
    fn read_json_resource_missing_file_is_config_error() {
        let result: Result<serde_json::Value> =
            read_json_resource(Path::new("/nonexistent/doc.json"));
        assert!(matches!(result.unwrap_err(), IntentError::Config(_)));
    }

    #[test]
    fn read_json_resource_shape_mismatch_is_config_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            classes: Vec<String>,
        }
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(&path, r#"{"classes": "not-a-list"}"#).unwrap();
        let result: Result<Doc> = read_json_resource(&path);
        let err = result.unwrap_err();
        assert!(matches!(err, IntentError::Config(_)));
        assert!(err.to_string().contains("doc.json"));
    }
}
