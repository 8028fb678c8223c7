use crate::cli::ModelArgs;
use irrigation_ai::config::AppConfig;
use irrigation_ai::error::AppError;
use irrigation_ai::workflows::irrigation::{ForestRegressor, IrrigationAdvisor};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ForestAdvisor = IrrigationAdvisor<ForestRegressor>;

/// Resolve the artifact path, preferring the command-line override.
pub(crate) fn model_path(config: &AppConfig, args: &ModelArgs) -> PathBuf {
    args.path
        .clone()
        .unwrap_or_else(|| config.model.artifact_path.clone())
}

/// Load the artifact once; any failure here aborts startup.
pub(crate) fn load_advisor(config: &AppConfig, args: &ModelArgs) -> Result<Arc<ForestAdvisor>, AppError> {
    let forest = ForestRegressor::from_path(model_path(config, args))?;
    Ok(Arc::new(IrrigationAdvisor::new(Arc::new(forest))))
}
