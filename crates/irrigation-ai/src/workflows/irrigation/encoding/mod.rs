mod tables;

pub use tables::{
    vocabulary, CategoryVocabulary, CROP_TYPE, DRAINAGE_PROPERTIES, GROWTH_STAGE,
    RAINFALL_PATTERN, SOIL_TYPE,
};

use super::domain::{CategoricalField, EncodedReadings, FieldReadings};

/// Raised when a categorical label is not part of its field's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("unknown {field} category '{value}'")]
    UnknownCategory {
        field: CategoricalField,
        value: String,
    },
}

pub fn encode(field: CategoricalField, label: &str) -> Result<u8, EncodingError> {
    vocabulary(field)
        .code(label)
        .ok_or_else(|| EncodingError::UnknownCategory {
            field,
            value: label.to_string(),
        })
}

pub fn decode(field: CategoricalField, code: u8) -> Option<&'static str> {
    vocabulary(field).label(code)
}

/// Replace every categorical label with its code. Fails on the first unknown
/// label, in [`CategoricalField::ALL`] order.
pub fn encode_readings(readings: &FieldReadings) -> Result<EncodedReadings, EncodingError> {
    Ok(EncodedReadings {
        temperature: readings.temperature,
        humidity: readings.humidity,
        wind_speed: readings.wind_speed,
        evapotranspiration: readings.evapotranspiration,
        soil_moisture_levels: readings.soil_moisture_levels,
        water_retention_capacity: readings.water_retention_capacity,
        crop_water_requirement: readings.crop_water_requirement,
        rainfall_pattern: encode(CategoricalField::RainfallPattern, &readings.rainfall_pattern)?,
        soil_type: encode(CategoricalField::SoilType, &readings.soil_type)?,
        drainage_properties: encode(
            CategoricalField::DrainageProperties,
            &readings.drainage_properties,
        )?,
        crop_type: encode(CategoricalField::CropType, &readings.crop_type)?,
        growth_stage: encode(CategoricalField::GrowthStage, &readings.growth_stage)?,
    })
}
