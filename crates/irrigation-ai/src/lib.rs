//! Crop water requirement prediction with rule-based agronomic advisories.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
