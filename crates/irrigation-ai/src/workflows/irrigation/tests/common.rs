use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::irrigation::features::FeatureVector;
use crate::workflows::irrigation::model::{PredictionError, WaterRequirementModel};
use crate::workflows::irrigation::{irrigation_router, FieldReadings, IrrigationAdvisor};

/// Readings that trip none of the advisory rules.
pub(super) fn balanced_readings() -> FieldReadings {
    FieldReadings {
        temperature: 25.0,
        humidity: 50.0,
        wind_speed: 5.0,
        evapotranspiration: 3.0,
        soil_moisture_levels: 50.0,
        water_retention_capacity: 60.0,
        crop_water_requirement: 10.0,
        rainfall_pattern: "moderate".to_string(),
        soil_type: "loamy".to_string(),
        drainage_properties: "moderate".to_string(),
        crop_type: "wheat".to_string(),
        growth_stage: "vegetative".to_string(),
    }
}

/// Dry loam: only the soil moisture rule should fire.
pub(super) fn dry_loam_readings() -> FieldReadings {
    FieldReadings {
        soil_moisture_levels: 10.0,
        water_retention_capacity: 50.0,
        ..balanced_readings()
    }
}

/// Every rule fires.
pub(super) fn stressed_readings() -> FieldReadings {
    FieldReadings {
        evapotranspiration: 9.2,
        soil_moisture_levels: 8.0,
        water_retention_capacity: 12.0,
        soil_type: "sandy".to_string(),
        drainage_properties: "good".to_string(),
        ..balanced_readings()
    }
}

/// Deterministic stand-in that returns the feature sum and records its inputs.
#[derive(Default)]
pub(super) struct RecordingModel {
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<f64>>>,
}

impl RecordingModel {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_input(&self) -> Option<Vec<f64>> {
        self.seen.lock().expect("model mutex poisoned").last().cloned()
    }
}

impl WaterRequirementModel for RecordingModel {
    fn feature_count(&self) -> usize {
        12
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .expect("model mutex poisoned")
            .push(features.as_slice().to_vec());
        Ok(features.as_slice().iter().sum())
    }
}

/// Model trained on a different column layout.
pub(super) struct ElevenFeatureModel;

impl WaterRequirementModel for ElevenFeatureModel {
    fn feature_count(&self) -> usize {
        11
    }

    fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictionError> {
        panic!("model must not be called with a mismatched vector")
    }
}

pub(super) fn recording_advisor() -> (IrrigationAdvisor<RecordingModel>, Arc<RecordingModel>) {
    let model = Arc::new(RecordingModel::default());
    (IrrigationAdvisor::new(model.clone()), model)
}

pub(super) fn router_with_recording_model() -> (axum::Router, Arc<RecordingModel>) {
    let (advisor, model) = recording_advisor();
    (irrigation_router(Arc::new(advisor)), model)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
