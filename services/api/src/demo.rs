use crate::cli::ModelArgs;
use crate::infra::{load_advisor, model_path, ForestAdvisor};
use chrono::Utc;
use clap::Args;
use irrigation_ai::config::AppConfig;
use irrigation_ai::error::AppError;
use irrigation_ai::telemetry;
use irrigation_ai::workflows::irrigation::{
    catalogue, read_readings_path, Assessment, AssessmentView, FieldReadings,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    #[command(flatten)]
    pub(crate) model: ModelArgs,
    /// Air temperature in °C
    #[arg(long)]
    pub(crate) temperature: Option<f64>,
    /// Relative humidity in %
    #[arg(long)]
    pub(crate) humidity: Option<f64>,
    /// Wind speed in m/s
    #[arg(long)]
    pub(crate) wind_speed: Option<f64>,
    /// Evapotranspiration in mm/day
    #[arg(long)]
    pub(crate) evapotranspiration: Option<f64>,
    /// Soil moisture in %
    #[arg(long)]
    pub(crate) soil_moisture: Option<f64>,
    /// Water retention capacity in %
    #[arg(long)]
    pub(crate) water_retention: Option<f64>,
    /// Observed crop water requirement in mm/day
    #[arg(long)]
    pub(crate) crop_water_requirement: Option<f64>,
    #[arg(long)]
    pub(crate) rainfall_pattern: Option<String>,
    #[arg(long)]
    pub(crate) soil_type: Option<String>,
    #[arg(long)]
    pub(crate) drainage: Option<String>,
    #[arg(long)]
    pub(crate) crop_type: Option<String>,
    #[arg(long)]
    pub(crate) growth_stage: Option<String>,
    /// Print the JSON payload served by the HTTP API instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    /// Form defaults overlaid with whatever was passed on the command line.
    pub(crate) fn readings(&self) -> FieldReadings {
        let defaults = FieldReadings::default();
        FieldReadings {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            humidity: self.humidity.unwrap_or(defaults.humidity),
            wind_speed: self.wind_speed.unwrap_or(defaults.wind_speed),
            evapotranspiration: self
                .evapotranspiration
                .unwrap_or(defaults.evapotranspiration),
            soil_moisture_levels: self.soil_moisture.unwrap_or(defaults.soil_moisture_levels),
            water_retention_capacity: self
                .water_retention
                .unwrap_or(defaults.water_retention_capacity),
            crop_water_requirement: self
                .crop_water_requirement
                .unwrap_or(defaults.crop_water_requirement),
            rainfall_pattern: self
                .rainfall_pattern
                .clone()
                .unwrap_or(defaults.rainfall_pattern),
            soil_type: self.soil_type.clone().unwrap_or(defaults.soil_type),
            drainage_properties: self
                .drainage
                .clone()
                .unwrap_or(defaults.drainage_properties),
            crop_type: self.crop_type.clone().unwrap_or(defaults.crop_type),
            growth_stage: self.growth_stage.clone().unwrap_or(defaults.growth_stage),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    #[command(flatten)]
    pub(crate) model: ModelArgs,
    /// CSV file whose header uses the API field names
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

fn cli_advisor(args: &ModelArgs) -> Result<Arc<ForestAdvisor>, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    tracing::debug!(path = %model_path(&config, args).display(), "loading model for cli");
    load_advisor(&config, args)
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let advisor = cli_advisor(&args.model)?;
    let readings = args.readings();
    let assessment = advisor.assess(&readings)?;

    if args.json {
        let view = AssessmentView::new(&assessment, Utc::now());
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
    } else {
        render_assessment(&readings, &assessment);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let advisor = cli_advisor(&args.model)?;
    let readings = read_readings_path(&args.csv)?;

    println!(
        "Scoring {} row(s) from {}",
        readings.len(),
        args.csv.display()
    );

    let mut rejected = 0usize;
    for (index, result) in advisor.assess_batch(&readings).into_iter().enumerate() {
        let row = index + 1;
        match result {
            Ok(assessment) => {
                let rules = assessment
                    .advisory
                    .triggered_rules()
                    .iter()
                    .map(|rule| format!("{rule:?}"))
                    .collect::<Vec<_>>();
                let rules = if rules.is_empty() {
                    "well-balanced".to_string()
                } else {
                    rules.join(", ")
                };
                println!(
                    "- row {row}: {:.2} mm/day ({rules})",
                    assessment.predicted_water_requirement
                );
            }
            Err(err) => {
                rejected += 1;
                println!("- row {row}: rejected ({err})");
            }
        }
    }

    if rejected > 0 {
        println!("{rejected} row(s) rejected");
    }
    Ok(())
}

pub(crate) fn run_controls() -> Result<(), AppError> {
    let catalogue = catalogue();

    println!("Numeric inputs");
    for control in &catalogue.numeric {
        println!(
            "- {} ({}): {} .. {} step {}, default {}",
            control.label, control.unit, control.min, control.max, control.step, control.default
        );
    }

    println!("\nCategorical inputs");
    for control in &catalogue.categorical {
        println!(
            "- {}: {} (default {})",
            control.label,
            control.options.join(", "),
            control.default
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: ModelArgs) -> Result<(), AppError> {
    let advisor = cli_advisor(&args)?;

    println!("Crop water advisor demo");
    for (title, readings) in demo_fields() {
        println!("\n== {title}");
        match advisor.assess(&readings) {
            Ok(assessment) => render_assessment(&readings, &assessment),
            Err(err) => println!("Rejected: {err}"),
        }
    }
    Ok(())
}

fn demo_fields() -> Vec<(&'static str, FieldReadings)> {
    let loam = FieldReadings {
        soil_type: "loamy".to_string(),
        drainage_properties: "moderate".to_string(),
        crop_type: "wheat".to_string(),
        growth_stage: "vegetative".to_string(),
        ..FieldReadings::default()
    };

    vec![
        ("Form defaults", FieldReadings::default()),
        ("Well-watered wheat on loam", loam.clone()),
        (
            "Dry loam after a hot week",
            FieldReadings {
                soil_moisture_levels: 10.0,
                water_retention_capacity: 50.0,
                ..loam.clone()
            },
        ),
        (
            "Cotton on sandy soil in a heat wave",
            FieldReadings {
                temperature: 38.0,
                humidity: 18.0,
                wind_speed: 9.0,
                evapotranspiration: 9.4,
                soil_moisture_levels: 9.0,
                water_retention_capacity: 14.0,
                crop_water_requirement: 17.0,
                rainfall_pattern: "low".to_string(),
                soil_type: "sandy".to_string(),
                drainage_properties: "good".to_string(),
                crop_type: "cotton".to_string(),
                growth_stage: "flowering".to_string(),
            },
        ),
        (
            "Unrecognised soil label",
            FieldReadings {
                soil_type: "chalky".to_string(),
                ..loam
            },
        ),
    ]
}

fn render_assessment(readings: &FieldReadings, assessment: &Assessment) {
    println!(
        "Field: {} at {} stage on {} soil ({} drainage, {} rainfall)",
        readings.crop_type,
        readings.growth_stage,
        readings.soil_type,
        readings.drainage_properties,
        readings.rainfall_pattern
    );
    println!("Predicted water requirement");
    println!("{}", assessment.summary());
    println!("\nOptimization suggestions");
    for suggestion in assessment.suggestions() {
        println!("- {suggestion}");
    }
}
