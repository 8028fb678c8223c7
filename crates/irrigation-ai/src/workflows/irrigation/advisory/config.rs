use serde::{Deserialize, Serialize};

/// Numeric cut-offs for the threshold rules. All comparisons are strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryThresholds {
    /// Evapotranspiration (mm/day) above which mulching is suggested.
    pub high_evapotranspiration: f64,
    /// Soil moisture (%) below which irrigation scheduling is flagged.
    pub low_soil_moisture: f64,
    /// Water retention capacity (%) below which amendments are suggested.
    pub low_water_retention: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            high_evapotranspiration: 8.0,
            low_soil_moisture: 15.0,
            low_water_retention: 20.0,
        }
    }
}
