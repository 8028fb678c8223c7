use super::super::domain::FieldReadings;
use super::config::AdvisoryThresholds;
use serde::{Deserialize, Serialize};

/// Independent agronomic checks, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryRule {
    SandySoil,
    HighEvapotranspiration,
    LowSoilMoisture,
    LowWaterRetention,
    DrainageImbalance,
}

impl AdvisoryRule {
    pub const ALL: [AdvisoryRule; 5] = [
        AdvisoryRule::SandySoil,
        AdvisoryRule::HighEvapotranspiration,
        AdvisoryRule::LowSoilMoisture,
        AdvisoryRule::LowWaterRetention,
        AdvisoryRule::DrainageImbalance,
    ];

    pub fn message(self) -> &'static str {
        match self {
            AdvisoryRule::SandySoil => {
                "Consider improving soil structure by adding organic matter or compost to enhance water retention."
            }
            AdvisoryRule::HighEvapotranspiration => {
                "High evapotranspiration detected. Use mulching to reduce evaporation and conserve soil moisture."
            }
            AdvisoryRule::LowSoilMoisture => {
                "Low soil moisture detected. Ensure proper irrigation scheduling to maintain adequate levels."
            }
            AdvisoryRule::LowWaterRetention => {
                "Low water retention capacity. Incorporate soil amendments to improve retention."
            }
            AdvisoryRule::DrainageImbalance => {
                "Poor drainage detected. Improve soil aeration or use soil conditioners to balance drainage."
            }
        }
    }

    pub(crate) fn applies(self, readings: &FieldReadings, thresholds: &AdvisoryThresholds) -> bool {
        match self {
            AdvisoryRule::SandySoil => readings.soil_type == "sandy",
            AdvisoryRule::HighEvapotranspiration => {
                readings.evapotranspiration > thresholds.high_evapotranspiration
            }
            AdvisoryRule::LowSoilMoisture => {
                readings.soil_moisture_levels < thresholds.low_soil_moisture
            }
            AdvisoryRule::LowWaterRetention => {
                readings.water_retention_capacity < thresholds.low_water_retention
            }
            // Fires on "good" while the message talks about poor drainage.
            // Kept as observed in the deployed form until the owner confirms
            // which of the two is intended.
            AdvisoryRule::DrainageImbalance => readings.drainage_properties == "good",
        }
    }
}

pub(crate) fn triggered_rules(
    readings: &FieldReadings,
    thresholds: &AdvisoryThresholds,
) -> Vec<AdvisoryRule> {
    AdvisoryRule::ALL
        .into_iter()
        .filter(|rule| rule.applies(readings, thresholds))
        .collect()
}
