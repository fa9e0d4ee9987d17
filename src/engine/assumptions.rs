use crate::baseline::{BaseTotals, Baseline};
use serde::{Deserialize, Serialize};

/// How the net present value discounts the scenario's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NpvMethod {
    /// Benefit arrives as a level annual stream over the horizon, each year
    /// discounted at the scenario rate. NPV falls as the rate rises.
    #[default]
    #[serde(alias = "annuity")]
    LevelAnnuity,
    /// `benefit * (1 - (1 + r)^-horizon) - investment`, as shown on the
    /// programme dashboard. Rises with the rate.
    #[serde(alias = "dashboard")]
    HorizonDiscount,
}

/// Fixed inputs of the metric formulas besides the scenario levers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub totals: BaseTotals,
    pub horizon_years: u32,
    pub npv_method: NpvMethod,
}

impl Assumptions {
    pub const DEFAULT_HORIZON_YEARS: u32 = 3;

    /// Assumptions whose base totals are derived from the given datasets.
    pub fn from_baseline(baseline: &Baseline) -> Self {
        Self {
            totals: baseline.totals(),
            ..Self::default()
        }
    }

    pub fn with_npv_method(mut self, method: NpvMethod) -> Self {
        self.npv_method = method;
        self
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            totals: BaseTotals::default(),
            horizon_years: Self::DEFAULT_HORIZON_YEARS,
            npv_method: NpvMethod::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_seeded_baseline_equals_default() {
        assert_eq!(Assumptions::from_baseline(&Baseline::seeded()), Assumptions::default());
    }

    #[test]
    fn npv_method_names_and_aliases() {
        let parse = |name: &str| serde_json::from_str::<NpvMethod>(&format!("\"{}\"", name));
        assert_eq!(parse("level-annuity").unwrap(), NpvMethod::LevelAnnuity);
        assert_eq!(parse("annuity").unwrap(), NpvMethod::LevelAnnuity);
        assert_eq!(parse("horizon-discount").unwrap(), NpvMethod::HorizonDiscount);
        assert_eq!(parse("dashboard").unwrap(), NpvMethod::HorizonDiscount);
        assert!(parse("irr").is_err());
        assert_eq!(
            serde_json::to_string(&NpvMethod::HorizonDiscount).unwrap(),
            "\"horizon-discount\""
        );
    }
}
