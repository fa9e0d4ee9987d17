//! Scenario bands around the most likely ROI, and named lever presets.

use super::metrics::round_half_up;
use crate::core::{ScenarioBands, ScenarioParameters};
use serde::{Deserialize, Serialize};

/// Fraction of the most likely ROI realised in the conservative case.
pub const CONSERVATIVE_FACTOR: f64 = 0.75;
/// Fraction of the most likely ROI realised in the optimistic case.
pub const OPTIMISTIC_FACTOR: f64 = 1.25;

pub fn compute_scenario_bands(roi_percent: i64) -> ScenarioBands {
    let scale = |factor: f64| round_half_up(roi_percent as f64 * factor) as i64;
    ScenarioBands {
        conservative_roi_percent: scale(CONSERVATIVE_FACTOR),
        most_likely_roi_percent: roi_percent,
        optimistic_roi_percent: scale(OPTIMISTIC_FACTOR),
    }
}

/// Named lever positions for common what-if questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioPreset {
    /// Cost overrun, weaker benefits, higher cost of capital
    Conservative,
    /// Initial slider positions
    #[serde(alias = "default")]
    Baseline,
    /// Leaner delivery, stronger benefits, cheaper capital
    Optimistic,
}

impl ScenarioPreset {
    pub fn parameters(self) -> ScenarioParameters {
        match self {
            ScenarioPreset::Conservative => ScenarioParameters::new(1.2, 0.8, 0.8, 12.0),
            ScenarioPreset::Baseline => ScenarioParameters::default(),
            ScenarioPreset::Optimistic => ScenarioParameters::new(0.9, 1.2, 1.2, 8.0),
        }
    }
}
