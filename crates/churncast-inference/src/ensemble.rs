//! Gradient-boosted tree ensemble for binary churn classification
//!
//! The classifier artifact carries a bias (in margin space) and a list of
//! regression trees over the preprocessed feature vector. Scoring sums
//! the leaf values and squashes through a sigmoid, so the probability is
//! always inside [0, 1].

use churncast_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Probability threshold for the positive (churn) decision
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Binary churn decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChurnLabel {
    /// The customer is likely to churn
    Churn,
    /// The customer is likely to stay
    Retain,
}

impl std::fmt::Display for ChurnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Churn => write!(f, "churn"),
            Self::Retain => write!(f, "retain"),
        }
    }
}

/// A node in a regression tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    /// Internal split: go left when `feature < threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },

    /// Terminal leaf contributing `value` to the margin
    Leaf { value: f64 },
}

/// A single regression tree stored as a node array rooted at index 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Score one feature vector.
    ///
    /// Assumes the tree passed `validate`, which guarantees in-bounds,
    /// strictly increasing child indices, so traversal terminates.
    pub fn score(&self, features: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn validate(&self, index: usize, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::artifact(format!("tree {} has no nodes", index)));
        }
        for (node_index, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= n_features {
                    return Err(Error::artifact(format!(
                        "tree {} node {} splits on feature {} but the model expects {} features",
                        index, node_index, feature, n_features
                    )));
                }
                if !threshold.is_finite() {
                    return Err(Error::artifact(format!(
                        "tree {} node {} has a non-finite threshold",
                        index, node_index
                    )));
                }
                // Children must point forward so traversal cannot loop.
                if *left <= node_index || *right <= node_index {
                    return Err(Error::artifact(format!(
                        "tree {} node {} has non-forward child indices",
                        index, node_index
                    )));
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(Error::artifact(format!(
                        "tree {} node {} has out-of-range child indices",
                        index, node_index
                    )));
                }
            }
        }
        Ok(())
    }
}

/// The pre-trained classifier loaded from the model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedTrees {
    /// Expected feature vector width
    pub n_features: usize,

    /// Margin-space bias added to the tree sum
    pub bias: f64,

    /// Boosted trees; leaf values already include the learning rate
    pub trees: Vec<Tree>,
}

impl GradientBoostedTrees {
    /// Check tree structure against the declared feature width
    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(Error::artifact("model declares zero features"));
        }
        if !self.bias.is_finite() {
            return Err(Error::artifact("model bias is not finite"));
        }
        if self.trees.is_empty() {
            return Err(Error::artifact("model has no trees"));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(index, self.n_features)?;
        }
        Ok(())
    }

    /// Raw margin for a feature vector
    pub fn decision_function(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(Error::schema_mismatch(format!(
                "model expects {} features, got {}",
                self.n_features,
                features.len()
            )));
        }
        let margin = self
            .trees
            .iter()
            .map(|tree| tree.score(features))
            .sum::<f64>();
        Ok(self.bias + margin)
    }

    /// Positive-class (churn) probability
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        Ok(sigmoid(self.decision_function(features)?))
    }

    /// Thresholded decision at [`DECISION_THRESHOLD`]
    pub fn predict(&self, features: &[f64]) -> Result<ChurnLabel> {
        let probability = self.predict_proba(features)?;
        Ok(if probability >= DECISION_THRESHOLD {
            ChurnLabel::Churn
        } else {
            ChurnLabel::Retain
        })
    }
}

pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
