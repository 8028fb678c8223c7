//! Tree-ensemble regressor loaded from a JSON artifact.
//!
//! Each tree is stored as parallel arrays in the layout most tree libraries
//! export: `feature[i] < 0` marks a leaf, otherwise samples with
//! `x[feature[i]] <= threshold[i]` continue at `left[i]` and the rest at
//! `right[i]`. The forest estimate is the mean of the per-tree leaf values.

use super::super::features::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};
use super::{ModelLoadError, PredictionError, WaterRequirementModel};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// On-disk representation of the trained forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestArtifact {
    #[serde(default)]
    pub model: Option<String>,
    pub feature_names: Vec<String>,
    pub trees: Vec<TreeArrays>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeArrays {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
    pub value: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

#[derive(Debug, Clone)]
struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    fn from_arrays(index: usize, arrays: TreeArrays) -> Result<Self, ModelLoadError> {
        let invalid = |reason: String| ModelLoadError::InvalidTree {
            tree: index,
            reason,
        };

        let n = arrays.feature.len();
        if n == 0 {
            return Err(invalid("no nodes".to_string()));
        }
        if arrays.threshold.len() != n
            || arrays.left.len() != n
            || arrays.right.len() != n
            || arrays.value.len() != n
        {
            return Err(invalid("node arrays have inconsistent lengths".to_string()));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let feature = arrays.feature[i];
            if feature < 0 {
                let value = arrays.value[i];
                if !value.is_finite() {
                    return Err(invalid(format!("leaf {i} has non-finite value")));
                }
                nodes.push(Node::Leaf(value));
                continue;
            }

            let feature = feature as usize;
            if feature >= FEATURE_COUNT {
                return Err(invalid(format!(
                    "node {i} splits on feature {feature}, model has {FEATURE_COUNT}"
                )));
            }
            // Children always follow their parent, which rules out cycles.
            let child = |raw: i32| -> Option<usize> {
                usize::try_from(raw).ok().filter(|c| *c > i && *c < n)
            };
            let (Some(left), Some(right)) = (child(arrays.left[i]), child(arrays.right[i])) else {
                return Err(invalid(format!("node {i} has out-of-range children")));
            };

            nodes.push(Node::Split {
                feature,
                threshold: arrays.threshold[i],
                left,
                right,
            });
        }

        Ok(Self { nodes })
    }

    fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0usize;
        loop {
            match self.nodes[idx] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Random-forest style regressor averaging the leaf values of its trees.
#[derive(Debug, Clone)]
pub struct ForestRegressor {
    trees: Vec<RegressionTree>,
    name: Option<String>,
}

impl ForestRegressor {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let forest = Self::from_reader(file)?;

        info!(
            path = %path.display(),
            trees = forest.n_trees(),
            nodes = forest.total_nodes(),
            "water requirement model loaded"
        );
        Ok(forest)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelLoadError> {
        let artifact: ForestArtifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self, ModelLoadError> {
        let ForestArtifact {
            model,
            feature_names,
            trees,
        } = artifact;

        if feature_names.len() != FEATURE_COUNT {
            return Err(ModelLoadError::FeatureCount {
                expected: FEATURE_COUNT,
                found: feature_names.len(),
            });
        }
        for (position, (found, expected)) in feature_names.iter().zip(FEATURE_COLUMNS).enumerate()
        {
            if found != expected {
                return Err(ModelLoadError::FeatureOrder {
                    position,
                    expected: expected.to_string(),
                    found: found.clone(),
                });
            }
        }

        if trees.is_empty() {
            return Err(ModelLoadError::EmptyForest);
        }

        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(index, arrays)| RegressionTree::from_arrays(index, arrays))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { trees, name: model })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn total_nodes(&self) -> usize {
        self.trees.iter().map(|tree| tree.nodes.len()).sum()
    }

    /// Individual tree estimates, in artifact order.
    pub fn tree_predictions(&self, features: &FeatureVector) -> Vec<f64> {
        self.trees
            .iter()
            .map(|tree| tree.predict(features.as_slice()))
            .collect()
    }
}

impl WaterRequirementModel for ForestRegressor {
    fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        if features.len() != FEATURE_COUNT {
            return Err(PredictionError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }

        let total: f64 = self.tree_predictions(features).iter().sum();
        let estimate = total / self.trees.len() as f64;
        if estimate.is_finite() {
            Ok(estimate)
        } else {
            Err(PredictionError::NonFinite(estimate))
        }
    }
}
