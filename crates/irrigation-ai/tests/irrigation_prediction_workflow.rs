//! End-to-end scenarios for the prediction pipeline, driven through the public
//! advisor facade with the forest artifact shipped in `models/`.

mod common {
    use std::path::PathBuf;
    use std::sync::Arc;

    use irrigation_ai::workflows::irrigation::{FieldReadings, ForestRegressor, IrrigationAdvisor};

    pub(super) fn artifact_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../models/water_requirement_forest.json")
    }

    pub(super) fn advisor() -> IrrigationAdvisor<ForestRegressor> {
        let forest = ForestRegressor::from_path(artifact_path()).expect("shipped artifact loads");
        IrrigationAdvisor::new(Arc::new(forest))
    }

    pub(super) fn loam_wheat() -> FieldReadings {
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

    pub(super) fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}

use common::*;
use irrigation_ai::workflows::irrigation::advisory::WELL_BALANCED_MESSAGE;
use irrigation_ai::workflows::irrigation::{
    AdvisoryRule, AssessmentError, CategoricalField, EncodingError, FieldReadings,
    ForestRegressor, WaterRequirementModel, FEATURE_COUNT,
};

#[test]
fn shipped_artifact_matches_feature_layout() {
    let forest = ForestRegressor::from_path(artifact_path()).expect("artifact loads");

    assert_eq!(forest.feature_count(), FEATURE_COUNT);
    assert_eq!(forest.n_trees(), 4);
    assert_eq!(forest.name(), Some("random_forest_regressor"));
}

#[test]
fn balanced_field_gets_estimate_and_positive_note() {
    let advisor = advisor();

    let assessment = advisor.assess(&loam_wheat()).expect("assessment");

    // trees: 7.8, 9.4, 9.0, 9.8
    assert_close(assessment.predicted_water_requirement, 9.0);
    assert_eq!(assessment.suggestions(), vec![WELL_BALANCED_MESSAGE]);
    assert_eq!(
        assessment.summary(),
        "The predicted water requirement is 9.00 mm/day."
    );
}

#[test]
fn dry_loam_only_recommends_irrigation_scheduling() {
    let advisor = advisor();
    let readings = FieldReadings {
        soil_moisture_levels: 10.0,
        water_retention_capacity: 50.0,
        ..loam_wheat()
    };

    let assessment = advisor.assess(&readings).expect("assessment");

    let suggestions = assessment.suggestions();
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].contains("irrigation scheduling"));
}

#[test]
fn stressed_sandy_field_triggers_every_rule() {
    let advisor = advisor();
    let readings = FieldReadings {
        evapotranspiration: 9.2,
        soil_moisture_levels: 8.0,
        water_retention_capacity: 12.0,
        soil_type: "sandy".to_string(),
        drainage_properties: "good".to_string(),
        ..loam_wheat()
    };

    let assessment = advisor.assess(&readings).expect("assessment");

    // trees: 9.6, 12.9, 9.0, 10.7
    assert_close(assessment.predicted_water_requirement, 10.55);
    assert_eq!(assessment.advisory.triggered_rules(), &AdvisoryRule::ALL);
}

#[test]
fn unknown_soil_type_is_rejected() {
    let advisor = advisor();
    let readings = FieldReadings {
        soil_type: "unknown".to_string(),
        ..loam_wheat()
    };

    match advisor.assess(&readings) {
        Err(AssessmentError::Encoding(EncodingError::UnknownCategory { field, value })) => {
            assert_eq!(field, CategoricalField::SoilType);
            assert_eq!(value, "unknown");
        }
        other => panic!("expected unknown category, got {other:?}"),
    }
}

#[test]
fn identical_readings_give_identical_predictions() {
    let advisor = advisor();
    let readings = loam_wheat();

    let first = advisor.assess(&readings).expect("first");
    let second = advisor.assess(&readings).expect("second");

    assert_eq!(
        first.predicted_water_requirement,
        second.predicted_water_requirement
    );
    assert_eq!(first.features, second.features);
}

#[test]
fn form_defaults_are_accepted() {
    let advisor = advisor();

    let assessment = advisor
        .assess(&FieldReadings::default())
        .expect("defaults assess");

    // trees: 7.8, 9.4, 9.0, 11.6; sandy soil and poor drainage by default
    assert_close(assessment.predicted_water_requirement, 9.45);
    assert_eq!(
        assessment.advisory.triggered_rules(),
        &[AdvisoryRule::SandySoil]
    );
}
