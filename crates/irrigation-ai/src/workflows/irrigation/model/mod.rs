mod forest;

pub use forest::{ForestArtifact, ForestRegressor, TreeArrays};

use super::features::FeatureVector;
use std::path::PathBuf;

/// Narrow seam around the trained regression artifact.
///
/// Implementations must be deterministic: the same vector always yields the
/// same estimate.
pub trait WaterRequirementModel: Send + Sync {
    /// Number of inputs the artifact was trained on.
    fn feature_count(&self) -> usize;

    /// Estimated water requirement in mm/day.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}

/// Per-request inference failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("feature vector has {actual} values but the model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("model produced a non-finite estimate ({0})")]
    NonFinite(f64),
}

/// Startup failure while loading the model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact contains no trees")]
    EmptyForest,
    #[error("model artifact declares {found} features, expected {expected}")]
    FeatureCount { expected: usize, found: usize },
    #[error("model feature {position} is '{found}', expected '{expected}'")]
    FeatureOrder {
        position: usize,
        expected: String,
        found: String,
    },
    #[error("tree {tree} is malformed: {reason}")]
    InvalidTree { tree: usize, reason: String },
}
