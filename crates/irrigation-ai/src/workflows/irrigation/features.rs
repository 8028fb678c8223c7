use super::domain::EncodedReadings;
use serde::Serialize;

pub const FEATURE_COUNT: usize = 12;

/// Column layout the regression model was trained on. Position is meaning:
/// the model sees an unlabeled vector, so reordering silently corrupts
/// predictions.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "temperature",
    "humidity",
    "wind_speed",
    "evapotranspiration",
    "soil_moisture_levels",
    "water_retention_capacity",
    "rainfall_pattern",
    "soil_type",
    "drainage_properties",
    "crop_type",
    "growth_stage",
    "crop_water_requirement",
];

/// Fixed-order numeric model input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn assemble(encoded: &EncodedReadings) -> Self {
        Self([
            encoded.temperature,
            encoded.humidity,
            encoded.wind_speed,
            encoded.evapotranspiration,
            encoded.soil_moisture_levels,
            encoded.water_retention_capacity,
            f64::from(encoded.rainfall_pattern),
            f64::from(encoded.soil_type),
            f64::from(encoded.drainage_properties),
            f64::from(encoded.crop_type),
            f64::from(encoded.growth_stage),
            encoded.crop_water_requirement,
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| self.0[index])
    }

    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.0.iter().copied())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
