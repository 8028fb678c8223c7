use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::advisory::AdvisoryRule;
use super::controls::catalogue;
use super::domain::FieldReadings;
use super::encoding::EncodingError;
use super::model::WaterRequirementModel;
use super::service::{Assessment, AssessmentError, IrrigationAdvisor};

/// Public payload returned for a prediction request.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub predicted_water_requirement: f64,
    pub unit: &'static str,
    pub summary: String,
    pub suggestions: Vec<&'static str>,
    pub triggered_rules: Vec<AdvisoryRule>,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentView {
    pub fn new(assessment: &Assessment, assessed_at: DateTime<Utc>) -> Self {
        Self {
            predicted_water_requirement: assessment.predicted_water_requirement,
            unit: "mm/day",
            summary: assessment.summary(),
            suggestions: assessment.suggestions(),
            triggered_rules: assessment.advisory.triggered_rules().to_vec(),
            assessed_at,
        }
    }
}

/// Router builder exposing the prediction pipeline and the form catalogue.
pub fn irrigation_router<M>(advisor: Arc<IrrigationAdvisor<M>>) -> Router
where
    M: WaterRequirementModel + 'static,
{
    Router::new()
        .route("/api/v1/irrigation/predict", post(predict_handler::<M>))
        .route("/api/v1/irrigation/controls", get(controls_handler))
        .with_state(advisor)
}

pub(crate) async fn predict_handler<M>(
    State(advisor): State<Arc<IrrigationAdvisor<M>>>,
    Json(readings): Json<FieldReadings>,
) -> Response
where
    M: WaterRequirementModel + 'static,
{
    match advisor.assess(&readings) {
        Ok(assessment) => {
            let view = AssessmentView::new(&assessment, Utc::now());
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(AssessmentError::Encoding(EncodingError::UnknownCategory { field, value })) => {
            let payload = json!({
                "error": format!("unknown {field} category '{value}'"),
                "field": field,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(AssessmentError::OutOfRange(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
                "field": violation.input,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn controls_handler() -> Response {
    (StatusCode::OK, Json(catalogue())).into_response()
}
