mod config;
mod rules;

pub use config::AdvisoryThresholds;
pub use rules::AdvisoryRule;

use super::domain::FieldReadings;
use serde::Serialize;

pub const WELL_BALANCED_MESSAGE: &str = "✅ All parameters are well-balanced for optimal water usage!";

/// Stateless evaluator applying the threshold rules to raw readings.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryEngine {
    thresholds: AdvisoryThresholds,
}

impl AdvisoryEngine {
    pub fn new(thresholds: AdvisoryThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AdvisoryThresholds {
        &self.thresholds
    }

    pub fn advise(&self, readings: &FieldReadings) -> Advisory {
        Advisory {
            triggered: rules::triggered_rules(readings, &self.thresholds),
        }
    }
}

/// Rules that fired for one set of readings, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    triggered: Vec<AdvisoryRule>,
}

impl Advisory {
    pub fn triggered_rules(&self) -> &[AdvisoryRule] {
        &self.triggered
    }

    pub fn is_well_balanced(&self) -> bool {
        self.triggered.is_empty()
    }

    /// Suggestion texts; a single well-balanced note when no rule fired.
    pub fn suggestions(&self) -> Vec<&'static str> {
        if self.triggered.is_empty() {
            return vec![WELL_BALANCED_MESSAGE];
        }
        self.triggered.iter().map(|rule| rule.message()).collect()
    }
}
