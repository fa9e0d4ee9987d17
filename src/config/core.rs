use serde::{Deserialize, Serialize};

use crate::baseline::Baseline;
use crate::core::{
    BaseCostSavingsCategory, BaseInvestmentPhase, BaseRevenueYear, ScenarioParameters,
};
use crate::engine::{Assumptions, NpvMethod, ScenarioModel, ScenarioPreset};

/// Root configuration structure for investcase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestcaseConfig {
    /// Named lever preset, used when `[parameters]` is absent
    #[serde(default)]
    pub preset: Option<ScenarioPreset>,

    /// Initial lever positions (clamped on load)
    #[serde(default)]
    pub parameters: Option<ScenarioParameters>,

    /// Formula assumptions
    #[serde(default)]
    pub assumptions: Option<AssumptionsConfig>,

    /// Replacement base datasets
    #[serde(default)]
    pub baseline: Option<BaselineConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsConfig {
    #[serde(default)]
    pub horizon_years: Option<u32>,

    #[serde(default)]
    pub npv_method: Option<NpvMethod>,

    /// Overrides the total derived from `[[baseline.investment]]`
    #[serde(default)]
    pub base_investment_total_m: Option<f64>,

    /// Overrides the total derived from `[[baseline.revenue]]`
    #[serde(default)]
    pub base_benefit_total_m: Option<f64>,

    /// Overrides the total derived from `[[baseline.cost_savings]]`
    #[serde(default)]
    pub base_cost_savings_total_m: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default)]
    pub investment: Option<Vec<BaseInvestmentPhase>>,

    #[serde(default)]
    pub revenue: Option<Vec<BaseRevenueYear>>,

    #[serde(default)]
    pub cost_savings: Option<Vec<BaseCostSavingsCategory>>,
}

impl InvestcaseConfig {
    /// Lever positions to start from: explicit parameters, then preset, then defaults.
    pub fn initial_parameters(&self) -> ScenarioParameters {
        self.parameters
            .or_else(|| self.preset.map(ScenarioPreset::parameters))
            .unwrap_or_default()
    }

    pub fn baseline(&self) -> Baseline {
        let mut baseline = Baseline::seeded();
        if let Some(ref overrides) = self.baseline {
            if let Some(ref investment) = overrides.investment {
                baseline.investment = investment.clone();
            }
            if let Some(ref revenue) = overrides.revenue {
                baseline.revenue = revenue.clone();
            }
            if let Some(ref cost_savings) = overrides.cost_savings {
                baseline.cost_savings = cost_savings.clone();
            }
        }
        baseline
    }

    pub fn assumptions(&self, baseline: &Baseline) -> Assumptions {
        let mut assumptions = Assumptions::from_baseline(baseline);
        if let Some(ref config) = self.assumptions {
            if let Some(years) = config.horizon_years {
                assumptions.horizon_years = years;
            }
            if let Some(method) = config.npv_method {
                assumptions.npv_method = method;
            }
            if let Some(total) = config.base_investment_total_m {
                assumptions.totals.investment_m = total;
            }
            if let Some(total) = config.base_benefit_total_m {
                assumptions.totals.revenue_benefit_m = total;
            }
            if let Some(total) = config.base_cost_savings_total_m {
                assumptions.totals.cost_savings_m = total;
            }
        }
        assumptions
    }

    pub fn build_model(&self) -> ScenarioModel {
        let baseline = self.baseline();
        let assumptions = self.assumptions(&baseline);
        ScenarioModel::new(baseline, assumptions)
    }
}
