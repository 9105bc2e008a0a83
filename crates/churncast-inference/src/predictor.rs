//! The churn predictor: preprocessor + classifier composed
//!
//! One synchronous transform-and-score call per record. The predictor is
//! built once at startup and shared read-only afterwards.

use crate::artifact::{ArtifactBundle, ArtifactConfig};
use crate::ensemble::{ChurnLabel, GradientBoostedTrees};
use crate::preprocessor::FittedPreprocessor;
use churncast_core::{CustomerRecord, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Outcome of a single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Thresholded decision
    pub label: ChurnLabel,

    /// Positive-class (churn) probability, in [0, 1]
    pub probability: f64,

    /// Raw classifier margin
    pub margin: f64,

    /// Wall-clock inference latency in microseconds
    pub latency_us: u64,
}

/// Applies the fitted preprocessor and the trained classifier to one
/// record at a time
#[derive(Debug, Clone)]
pub struct ChurnPredictor {
    preprocessor: Arc<FittedPreprocessor>,
    model: Arc<GradientBoostedTrees>,
}

impl ChurnPredictor {
    /// Build a predictor from already-loaded artifacts
    pub fn new(bundle: ArtifactBundle) -> Self {
        Self {
            preprocessor: Arc::new(bundle.preprocessor),
            model: Arc::new(bundle.model),
        }
    }

    /// Load the artifacts from disk and build the predictor
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        Ok(Self::new(ArtifactBundle::load(config)?))
    }

    /// Predict churn for a single record.
    ///
    /// Deterministic: the same record against the same artifacts yields
    /// the same label and probability.
    pub fn predict(&self, record: &CustomerRecord) -> Result<Prediction> {
        let start = Instant::now();

        let features = self.preprocessor.transform(record)?;
        let margin = self.model.decision_function(&features)?;
        let probability = crate::ensemble::sigmoid(margin);
        let label = if probability >= crate::ensemble::DECISION_THRESHOLD {
            ChurnLabel::Churn
        } else {
            ChurnLabel::Retain
        };

        let latency_us = start.elapsed().as_micros() as u64;
        tracing::debug!(%label, probability, latency_us, "prediction complete");

        Ok(Prediction {
            label,
            probability,
            margin,
            latency_us,
        })
    }

    /// Feature vector width the predictor operates on
    pub fn feature_width(&self) -> usize {
        self.model.n_features
    }

    /// Number of boosted trees in the loaded model
    pub fn tree_count(&self) -> usize {
        self.model.trees.len()
    }
}
