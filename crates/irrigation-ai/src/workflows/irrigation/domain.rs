use serde::{Deserialize, Serialize};
use std::fmt;

/// One set of field measurements as entered by a grower, before any encoding.
///
/// Categorical fields stay as free-form labels so that values outside the
/// known vocabularies reach the encoder and are rejected there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReadings {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Evapotranspiration in mm/day.
    pub evapotranspiration: f64,
    /// Volumetric soil moisture in %.
    pub soil_moisture_levels: f64,
    /// Soil water retention capacity in %.
    pub water_retention_capacity: f64,
    /// Observed crop water requirement in mm/day.
    pub crop_water_requirement: f64,
    pub rainfall_pattern: String,
    pub soil_type: String,
    pub drainage_properties: String,
    pub crop_type: String,
    pub growth_stage: String,
}

impl FieldReadings {
    pub fn numeric(&self, input: NumericInput) -> f64 {
        match input {
            NumericInput::Temperature => self.temperature,
            NumericInput::Humidity => self.humidity,
            NumericInput::WindSpeed => self.wind_speed,
            NumericInput::Evapotranspiration => self.evapotranspiration,
            NumericInput::SoilMoisture => self.soil_moisture_levels,
            NumericInput::WaterRetentionCapacity => self.water_retention_capacity,
            NumericInput::CropWaterRequirement => self.crop_water_requirement,
        }
    }

    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::RainfallPattern => &self.rainfall_pattern,
            CategoricalField::SoilType => &self.soil_type,
            CategoricalField::DrainageProperties => &self.drainage_properties,
            CategoricalField::CropType => &self.crop_type,
            CategoricalField::GrowthStage => &self.growth_stage,
        }
    }
}

/// The seven real-valued measurements collected per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericInput {
    Temperature,
    Humidity,
    WindSpeed,
    Evapotranspiration,
    #[serde(rename = "soil_moisture_levels")]
    SoilMoisture,
    WaterRetentionCapacity,
    CropWaterRequirement,
}

impl NumericInput {
    pub const ALL: [NumericInput; 7] = [
        NumericInput::Temperature,
        NumericInput::Humidity,
        NumericInput::WindSpeed,
        NumericInput::Evapotranspiration,
        NumericInput::SoilMoisture,
        NumericInput::WaterRetentionCapacity,
        NumericInput::CropWaterRequirement,
    ];

    /// Wire name, identical to the matching [`FieldReadings`] field.
    pub fn name(self) -> &'static str {
        match self {
            NumericInput::Temperature => "temperature",
            NumericInput::Humidity => "humidity",
            NumericInput::WindSpeed => "wind_speed",
            NumericInput::Evapotranspiration => "evapotranspiration",
            NumericInput::SoilMoisture => "soil_moisture_levels",
            NumericInput::WaterRetentionCapacity => "water_retention_capacity",
            NumericInput::CropWaterRequirement => "crop_water_requirement",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            NumericInput::Temperature => "°C",
            NumericInput::Humidity
            | NumericInput::SoilMoisture
            | NumericInput::WaterRetentionCapacity => "%",
            NumericInput::WindSpeed => "m/s",
            NumericInput::Evapotranspiration | NumericInput::CropWaterRequirement => "mm/day",
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five categorical inputs, each backed by a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    RainfallPattern,
    SoilType,
    DrainageProperties,
    CropType,
    GrowthStage,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 5] = [
        CategoricalField::RainfallPattern,
        CategoricalField::SoilType,
        CategoricalField::DrainageProperties,
        CategoricalField::CropType,
        CategoricalField::GrowthStage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoricalField::RainfallPattern => "rainfall_pattern",
            CategoricalField::SoilType => "soil_type",
            CategoricalField::DrainageProperties => "drainage_properties",
            CategoricalField::CropType => "crop_type",
            CategoricalField::GrowthStage => "growth_stage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoricalField::RainfallPattern => "Rainfall Pattern",
            CategoricalField::SoilType => "Soil Type",
            CategoricalField::DrainageProperties => "Drainage Properties",
            CategoricalField::CropType => "Crop Type",
            CategoricalField::GrowthStage => "Growth Stage",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Readings with every categorical label replaced by its vocabulary code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EncodedReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub evapotranspiration: f64,
    pub soil_moisture_levels: f64,
    pub water_retention_capacity: f64,
    pub crop_water_requirement: f64,
    pub rainfall_pattern: u8,
    pub soil_type: u8,
    pub drainage_properties: u8,
    pub crop_type: u8,
    pub growth_stage: u8,
}
