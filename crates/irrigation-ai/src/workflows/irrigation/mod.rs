//! Crop water requirement pipeline: readings are range-checked, their
//! categorical labels encoded, assembled into the model's fixed feature
//! layout, and scored; the raw readings also run through the advisory rules.

pub mod advisory;
pub mod batch;
pub mod controls;
pub mod domain;
pub mod encoding;
pub mod features;
pub mod model;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use advisory::{Advisory, AdvisoryEngine, AdvisoryRule, AdvisoryThresholds};
pub use batch::{read_readings, read_readings_path, BatchImportError};
pub use controls::{catalogue, validate_ranges, ControlCatalogue, RangeViolation};
pub use domain::{CategoricalField, EncodedReadings, FieldReadings, NumericInput};
pub use encoding::{decode, encode, encode_readings, CategoryVocabulary, EncodingError};
pub use features::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};
pub use model::{ForestRegressor, ModelLoadError, PredictionError, WaterRequirementModel};
pub use router::{irrigation_router, AssessmentView};
pub use service::{Assessment, AssessmentError, IrrigationAdvisor};
