//! Classifier capability interface and the gradient-boosted artifact.
//!
//! The pre-trained model is an external collaborator: the training side exports a JSON document
//! and this crate loads it. Everything beyond the document's structural shape is opaque and never
//! audited here.
//!
//! The [`Classifier`] trait is the narrow seam the pipeline sees. Label prediction is mandatory;
//! probability prediction is an optional capability, and callers branch explicitly on its
//! presence.

use crate::constants::FEATURE_COUNT;
use crate::error::{InferenceFault, ModelLoadError};
use crate::features::FeatureRow;
use serde::Deserialize;

/// Artifact format revision this build understands.
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Narrow capability interface over a loaded classifier artifact.
pub trait Classifier: Send + Sync {
    /// Predicts a binary label (0 or 1) for every row in the batch.
    fn predict_labels(&self, batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceFault>;

    /// Predicts the positive-class probability for every row, if this artifact exposes
    /// probability output.
    ///
    /// `None` means the capability is absent, not that the invocation failed.
    fn predict_probabilities(
        &self,
        batch: &[FeatureRow],
    ) -> Option<Result<Vec<f64>, InferenceFault>> {
        let _ = batch;
        None
    }
}

/// Training objective the artifact was produced with.
///
/// The objective decides the probability capability: logistic margins convert to calibrated
/// probabilities, hinge output is labels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Objective {
    #[serde(rename = "binary:logistic")]
    BinaryLogistic,
    #[serde(rename = "binary:hinge")]
    BinaryHinge,
}

/// One node of an array-encoded decision tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Interior split: rows with `value < threshold` descend left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal leaf contributing `value` to the margin.
    Leaf { value: f64 },
}

/// An array-encoded decision tree; node 0 is the root.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walks the tree for one row and returns the leaf value.
    ///
    /// Structural validation guarantees child indices are in bounds and strictly increasing, so
    /// the walk terminates.
    fn score(&self, row: &FeatureRow) -> f64 {
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
                    index = if row[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// The pre-trained gradient-boosted tree ensemble exported by the training side.
#[derive(Debug, Clone, Deserialize)]
pub struct GradientBoostedEnsemble {
    pub format_version: u32,
    pub objective: Objective,
    pub base_score: f64,
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl GradientBoostedEnsemble {
    /// Checks the structural invariants tree traversal relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError::InvalidArtifact`] if the document's format version is not
    /// supported, the feature width is wrong, the ensemble is empty, a split references a
    /// feature or child index out of bounds, or a child index does not come after its parent
    /// (which would permit cycles).
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(ModelLoadError::InvalidArtifact(format!(
                "unsupported format version {} (expected {})",
                self.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }

        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ModelLoadError::InvalidArtifact(format!(
                "expected {} feature names, got {}",
                FEATURE_COUNT,
                self.feature_names.len()
            )));
        }

        if self.trees.is_empty() {
            return Err(ModelLoadError::InvalidArtifact(
                "ensemble contains no trees".into(),
            ));
        }

        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelLoadError::InvalidArtifact(format!(
                    "tree {} has no nodes",
                    tree_index
                )));
            }

            for (node_index, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= FEATURE_COUNT {
                        return Err(ModelLoadError::InvalidArtifact(format!(
                            "tree {} node {} splits on unknown feature index {}",
                            tree_index, node_index, feature
                        )));
                    }

                    // Children must be stored after their parent; this bounds traversal and
                    // rules out cycles.
                    let in_bounds = *left < tree.nodes.len() && *right < tree.nodes.len();
                    let forward = *left > node_index && *right > node_index;
                    if !in_bounds || !forward {
                        return Err(ModelLoadError::InvalidArtifact(format!(
                            "tree {} node {} has invalid child indices ({}, {})",
                            tree_index, node_index, left, right
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Raw margin for one row: the base score plus every tree's leaf value.
    fn margin(&self, row: &FeatureRow) -> f64 {
        self.base_score + self.trees.iter().map(|tree| tree.score(row)).sum::<f64>()
    }
}

fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

impl Classifier for GradientBoostedEnsemble {
    fn predict_labels(&self, batch: &[FeatureRow]) -> Result<Vec<u8>, InferenceFault> {
        Ok(batch
            .iter()
            .map(|row| {
                let margin = self.margin(row);
                match self.objective {
                    Objective::BinaryLogistic => u8::from(sigmoid(margin) >= 0.5),
                    Objective::BinaryHinge => u8::from(margin > 0.0),
                }
            })
            .collect())
    }

    fn predict_probabilities(
        &self,
        batch: &[FeatureRow],
    ) -> Option<Result<Vec<f64>, InferenceFault>> {
        match self.objective {
            Objective::BinaryLogistic => Some(Ok(batch
                .iter()
                .map(|row| sigmoid(self.margin(row)))
                .collect())),
            Objective::BinaryHinge => None,
        }
    }
}
