//! Artifact configuration and loading
//!
//! The two fitted artifacts are read once at process start from fixed
//! relative paths (overridable via a YAML config file) and are treated as
//! read-only for the life of the process.

use crate::ensemble::GradientBoostedTrees;
use crate::preprocessor::FittedPreprocessor;
use churncast_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_preprocessor_path() -> PathBuf {
    PathBuf::from("vault/churn_preprocessor.json")
}

fn default_model_path() -> PathBuf {
    PathBuf::from("vault/churn_model.json")
}

/// Locations of the serialized artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the fitted preprocessor artifact
    #[serde(default = "default_preprocessor_path")]
    pub preprocessor: PathBuf,

    /// Path to the trained classifier artifact
    #[serde(default = "default_model_path")]
    pub model: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            preprocessor: default_preprocessor_path(),
            model: default_model_path(),
        }
    }
}

impl ArtifactConfig {
    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid artifact config: {}", e)))
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }
}

/// The two fitted artifacts, loaded and cross-checked
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub preprocessor: FittedPreprocessor,
    pub model: GradientBoostedTrees,
}

impl ArtifactBundle {
    /// Load both artifacts and verify they agree on the feature layout
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let preprocessor: FittedPreprocessor = read_artifact(&config.preprocessor)?;
        preprocessor.validate()?;

        let model: GradientBoostedTrees = read_artifact(&config.model)?;
        model.validate()?;

        if model.n_features != preprocessor.output_width() {
            return Err(Error::schema_mismatch(format!(
                "model expects {} features but the preprocessor emits {}",
                model.n_features,
                preprocessor.output_width()
            )));
        }

        tracing::info!(
            preprocessor = %config.preprocessor.display(),
            model = %config.model.display(),
            features = preprocessor.output_width(),
            trees = model.trees.len(),
            "loaded inference artifacts"
        );

        Ok(Self {
            preprocessor,
            model,
        })
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::artifact(format!("failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::artifact(format!("failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ArtifactConfig::default();
        assert_eq!(
            config.preprocessor,
            PathBuf::from("vault/churn_preprocessor.json")
        );
        assert_eq!(config.model, PathBuf::from("vault/churn_model.json"));
    }

    #[test]
    fn test_config_yaml_partial_override() {
        let config = ArtifactConfig::from_yaml("model: /opt/models/churn.json\n").unwrap();
        assert_eq!(config.model, PathBuf::from("/opt/models/churn.json"));
        // Unspecified paths keep their defaults
        assert_eq!(
            config.preprocessor,
            PathBuf::from("vault/churn_preprocessor.json")
        );
    }

    #[test]
    fn test_missing_artifact_file() {
        let config = ArtifactConfig {
            preprocessor: PathBuf::from("/nonexistent/preprocessor.json"),
            model: PathBuf::from("/nonexistent/model.json"),
        };
        let err = ArtifactBundle::load(&config).unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }
}
