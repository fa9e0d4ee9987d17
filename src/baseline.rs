//! Fixed reference datasets for the investment case.
//!
//! These are the un-scaled figures every scenario starts from. The three
//! base totals used by the metric formulas (38 / 2248 / 100 $M) are not
//! independent constants: they follow from these datasets, and
//! [`Baseline::totals`] derives them.

use crate::core::{BaseCostSavingsCategory, BaseInvestmentPhase, BaseRevenueYear};
use serde::{Deserialize, Serialize};

/// Base totals in $M over the analysis horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseTotals {
    pub investment_m: f64,
    pub revenue_benefit_m: f64,
    pub cost_savings_m: f64,
}

impl Default for BaseTotals {
    fn default() -> Self {
        Self {
            investment_m: 38.0,
            revenue_benefit_m: 2248.0,
            cost_savings_m: 100.0,
        }
    }
}

/// The three base datasets, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub investment: Vec<BaseInvestmentPhase>,
    /// Chronological; the first row is the pre-programme baseline year.
    pub revenue: Vec<BaseRevenueYear>,
    pub cost_savings: Vec<BaseCostSavingsCategory>,
}

impl Default for Baseline {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Baseline {
    /// The reference datasets of the transformation programme.
    pub fn seeded() -> Self {
        Self {
            investment: vec![
                phase("Phase 1", 12.0, "Months 1-6", "Infrastructure"),
                phase("Phase 2", 18.0, "Months 7-12", "Customer Experience"),
                phase("Phase 3", 8.0, "Months 13-18", "Analytics & AI"),
            ],
            revenue: vec![
                revenue_year("Baseline", 64.0, 3136.0),
                revenue_year("Year 1", 192.0, 3292.0),
                revenue_year("Year 2", 480.0, 3456.0),
                revenue_year("Year 3", 800.0, 3628.0),
            ],
            cost_savings: vec![
                savings("Labor Optimization", 15.0, [8.0, 15.0, 15.0]),
                savings("Inventory Management", 12.0, [6.0, 12.0, 12.0]),
                savings("Marketing Efficiency", 8.0, [4.0, 8.0, 8.0]),
                savings("Energy & Facilities", 5.0, [2.0, 5.0, 5.0]),
            ],
        }
    }

    pub fn investment_total_m(&self) -> f64 {
        self.investment.iter().map(|p| p.base_investment_m).sum()
    }

    /// Incremental revenue over the baseline year, summed over the projection years.
    pub fn revenue_benefit_m(&self) -> f64 {
        let Some((baseline, projection)) = self.revenue.split_first() else {
            return 0.0;
        };
        let base_total = baseline.total_m();
        projection.iter().map(|y| y.total_m() - base_total).sum()
    }

    /// Sum of the per-category three-year savings ramps.
    pub fn cost_savings_total_m(&self) -> f64 {
        self.cost_savings.iter().map(|c| c.ramp_total_m()).sum()
    }

    /// Steady-state annual savings across categories.
    pub fn annual_cost_savings_m(&self) -> f64 {
        self.cost_savings.iter().map(|c| c.base_savings_m).sum()
    }

    pub fn totals(&self) -> BaseTotals {
        BaseTotals {
            investment_m: self.investment_total_m(),
            revenue_benefit_m: self.revenue_benefit_m(),
            cost_savings_m: self.cost_savings_total_m(),
        }
    }
}

fn phase(name: &str, investment: f64, timeline: &str, focus: &str) -> BaseInvestmentPhase {
    BaseInvestmentPhase {
        phase: name.to_string(),
        base_investment_m: investment,
        timeline: timeline.to_string(),
        focus: focus.to_string(),
    }
}

fn revenue_year(year: &str, digital: f64, traditional: f64) -> BaseRevenueYear {
    BaseRevenueYear {
        year: year.to_string(),
        base_digital_m: digital,
        traditional_m: traditional,
    }
}

fn savings(category: &str, annual: f64, ramp: [f64; 3]) -> BaseCostSavingsCategory {
    BaseCostSavingsCategory {
        category: category.to_string(),
        base_savings_m: annual,
        year1_m: ramp[0],
        year2_m: ramp[1],
        year3_m: ramp[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_datasets_have_expected_shape() {
        let baseline = Baseline::seeded();
        assert_eq!(baseline.investment.len(), 3);
        assert_eq!(baseline.revenue.len(), 4);
        assert_eq!(baseline.cost_savings.len(), 4);
        assert_eq!(baseline.revenue[0].year, "Baseline");
        assert_eq!(baseline.revenue[3].total_m(), 4428.0);
    }

    #[test]
    fn derived_totals_match_default_constants() {
        assert_eq!(Baseline::seeded().totals(), BaseTotals::default());
    }

    #[test]
    fn annual_savings_run_rate_is_forty() {
        assert_eq!(Baseline::seeded().annual_cost_savings_m(), 40.0);
    }

    #[test]
    fn revenue_benefit_of_empty_projection_is_zero() {
        let baseline = Baseline {
            revenue: Vec::new(),
            ..Baseline::seeded()
        };
        assert_eq!(baseline.revenue_benefit_m(), 0.0);

        let only_base = Baseline {
            revenue: vec![revenue_year("Baseline", 10.0, 90.0)],
            ..Baseline::seeded()
        };
        assert_eq!(only_base.revenue_benefit_m(), 0.0);
    }
}
