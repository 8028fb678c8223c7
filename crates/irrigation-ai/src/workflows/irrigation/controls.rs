use super::domain::{CategoricalField, FieldReadings, NumericInput};
use super::encoding::vocabulary;
use serde::Serialize;

/// Documented range and form defaults for one numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericControl {
    pub input: NumericInput,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl NumericControl {
    const fn new(
        input: NumericInput,
        label: &'static str,
        unit: &'static str,
        bounds: (f64, f64),
        default: f64,
    ) -> Self {
        Self {
            input,
            label,
            unit,
            min: bounds.0,
            max: bounds.1,
            default,
            step: 0.1,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

pub const NUMERIC_CONTROLS: [NumericControl; 7] = [
    NumericControl::new(
        NumericInput::Temperature,
        "Temperature",
        "°C",
        (-10.0, 50.0),
        25.0,
    ),
    NumericControl::new(NumericInput::Humidity, "Humidity", "%", (0.0, 100.0), 50.0),
    NumericControl::new(NumericInput::WindSpeed, "Wind Speed", "m/s", (0.0, 20.0), 5.0),
    NumericControl::new(
        NumericInput::Evapotranspiration,
        "Evapotranspiration",
        "mm/day",
        (0.0, 10.0),
        3.0,
    ),
    NumericControl::new(
        NumericInput::SoilMoisture,
        "Soil Moisture Levels",
        "%",
        (0.0, 100.0),
        50.0,
    ),
    NumericControl::new(
        NumericInput::WaterRetentionCapacity,
        "Water Retention Capacity",
        "%",
        (0.0, 100.0),
        60.0,
    ),
    NumericControl::new(
        NumericInput::CropWaterRequirement,
        "Actual Water Requirement",
        "mm/day",
        (0.0, 25.0),
        10.0,
    ),
];

pub fn numeric_control(input: NumericInput) -> &'static NumericControl {
    match input {
        NumericInput::Temperature => &NUMERIC_CONTROLS[0],
        NumericInput::Humidity => &NUMERIC_CONTROLS[1],
        NumericInput::WindSpeed => &NUMERIC_CONTROLS[2],
        NumericInput::Evapotranspiration => &NUMERIC_CONTROLS[3],
        NumericInput::SoilMoisture => &NUMERIC_CONTROLS[4],
        NumericInput::WaterRetentionCapacity => &NUMERIC_CONTROLS[5],
        NumericInput::CropWaterRequirement => &NUMERIC_CONTROLS[6],
    }
}

/// Selector contents for one categorical input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalControl {
    pub field: CategoricalField,
    pub label: &'static str,
    pub options: Vec<&'static str>,
    pub default: &'static str,
}

/// Everything a form needs to render valid inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlCatalogue {
    pub numeric: Vec<NumericControl>,
    pub categorical: Vec<CategoricalControl>,
}

pub fn catalogue() -> ControlCatalogue {
    let categorical = CategoricalField::ALL
        .into_iter()
        .map(|field| {
            let vocab = vocabulary(field);
            CategoricalControl {
                field,
                label: field.label(),
                options: vocab.labels().collect(),
                default: vocab.default_label(),
            }
        })
        .collect();

    ControlCatalogue {
        numeric: NUMERIC_CONTROLS.to_vec(),
        categorical,
    }
}

/// A numeric input outside its documented range, or not a finite number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{input} value {value} is outside the accepted range [{min}, {max}]")]
pub struct RangeViolation {
    pub input: NumericInput,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Check every numeric input against its control, reporting the first violation.
pub fn validate_ranges(readings: &FieldReadings) -> Result<(), RangeViolation> {
    for control in &NUMERIC_CONTROLS {
        let value = readings.numeric(control.input);
        if !control.contains(value) {
            return Err(RangeViolation {
                input: control.input,
                value,
                min: control.min,
                max: control.max,
            });
        }
    }
    Ok(())
}

impl Default for FieldReadings {
    fn default() -> Self {
        let numeric = |input| numeric_control(input).default;
        let label = |field| vocabulary(field).default_label().to_string();

        Self {
            temperature: numeric(NumericInput::Temperature),
            humidity: numeric(NumericInput::Humidity),
            wind_speed: numeric(NumericInput::WindSpeed),
            evapotranspiration: numeric(NumericInput::Evapotranspiration),
            soil_moisture_levels: numeric(NumericInput::SoilMoisture),
            water_retention_capacity: numeric(NumericInput::WaterRetentionCapacity),
            crop_water_requirement: numeric(NumericInput::CropWaterRequirement),
            rainfall_pattern: label(CategoricalField::RainfallPattern),
            soil_type: label(CategoricalField::SoilType),
            drainage_properties: label(CategoricalField::DrainageProperties),
            crop_type: label(CategoricalField::CropType),
            growth_stage: label(CategoricalField::GrowthStage),
        }
    }
}
