//! Churncast inference
//!
//! Loads the two serialized artifacts produced by the offline training
//! pipeline (a fitted preprocessor and a gradient-boosted classifier) and
//! scores one customer record at a time. Nothing here fits or trains;
//! artifacts are read once at startup and treated as read-only.

pub mod artifact;
pub mod ensemble;
pub mod predictor;
pub mod preprocessor;

pub use artifact::{ArtifactBundle, ArtifactConfig};
pub use ensemble::{ChurnLabel, GradientBoostedTrees, Tree, TreeNode, DECISION_THRESHOLD};
pub use predictor::{ChurnPredictor, Prediction};
pub use preprocessor::{CategoricalColumn, FittedPreprocessor, NumericColumn};
