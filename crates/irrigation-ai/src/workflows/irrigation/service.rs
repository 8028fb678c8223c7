use std::sync::Arc;

use tracing::{debug, warn};

use super::advisory::{Advisory, AdvisoryEngine, AdvisoryThresholds};
use super::controls::{validate_ranges, RangeViolation};
use super::domain::FieldReadings;
use super::encoding::{encode_readings, EncodingError};
use super::features::FeatureVector;
use super::model::{PredictionError, WaterRequirementModel};

/// Service composing validation, encoding, inference, and the advisory rules.
pub struct IrrigationAdvisor<M> {
    model: Arc<M>,
    engine: AdvisoryEngine,
}

impl<M> IrrigationAdvisor<M>
where
    M: WaterRequirementModel + 'static,
{
    pub fn new(model: Arc<M>) -> Self {
        Self::with_thresholds(model, AdvisoryThresholds::default())
    }

    pub fn with_thresholds(model: Arc<M>, thresholds: AdvisoryThresholds) -> Self {
        Self {
            model,
            engine: AdvisoryEngine::new(thresholds),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Predict the water requirement and collect suggestions for one record.
    ///
    /// Invalid readings are rejected before the model is consulted.
    pub fn assess(&self, readings: &FieldReadings) -> Result<Assessment, AssessmentError> {
        let features = self.features_for(readings)?;
        let predicted = self.model.predict(&features)?;
        let advisory = self.engine.advise(readings);

        debug!(
            crop = %readings.crop_type,
            stage = %readings.growth_stage,
            predicted,
            rules = advisory.triggered_rules().len(),
            "irrigation assessment complete"
        );

        Ok(Assessment {
            predicted_water_requirement: predicted,
            features,
            advisory,
        })
    }

    /// Score each record independently; one bad row does not stop the rest.
    pub fn assess_batch(
        &self,
        batch: &[FieldReadings],
    ) -> Vec<Result<Assessment, AssessmentError>> {
        batch
            .iter()
            .enumerate()
            .map(|(row, readings)| {
                self.assess(readings).inspect_err(|err| {
                    warn!(row, error = %err, "batch row rejected");
                })
            })
            .collect()
    }

    pub fn advise(&self, readings: &FieldReadings) -> Advisory {
        self.engine.advise(readings)
    }

    fn features_for(&self, readings: &FieldReadings) -> Result<FeatureVector, AssessmentError> {
        validate_ranges(readings)?;
        let encoded = encode_readings(readings)?;
        let features = FeatureVector::assemble(&encoded);

        let expected = self.model.feature_count();
        if features.len() != expected {
            return Err(PredictionError::ShapeMismatch {
                expected,
                actual: features.len(),
            }
            .into());
        }

        Ok(features)
    }
}

/// Outcome of one assessment: the model estimate plus the advisory trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Estimated water requirement in mm/day.
    pub predicted_water_requirement: f64,
    pub features: FeatureVector,
    pub advisory: Advisory,
}

impl Assessment {
    pub fn summary(&self) -> String {
        format!(
            "The predicted water requirement is {:.2} mm/day.",
            self.predicted_water_requirement
        )
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        self.advisory.suggestions()
    }
}

/// Error raised while assessing a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    OutOfRange(#[from] RangeViolation),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl AssessmentError {
    /// True when the caller supplied bad readings, as opposed to a model fault.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AssessmentError::OutOfRange(_) | AssessmentError::Encoding(_)
        )
    }
}
