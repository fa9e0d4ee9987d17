//! Chart-ready datasets: base records scaled by one lever each.
//!
//! Length and order of every base slice are preserved. At a multiplier of
//! exactly 1.0 each adjusted value equals its base value.

use crate::core::{
    AdjustedCostSavingsCategory, AdjustedInvestmentPhase, AdjustedRevenueYear,
    BaseCostSavingsCategory, BaseInvestmentPhase, BaseRevenueYear, Multiplier,
};

pub fn compute_adjusted_investment(
    base: &[BaseInvestmentPhase],
    investment_multiplier: Multiplier,
) -> Vec<AdjustedInvestmentPhase> {
    let factor = investment_multiplier.value();
    base.iter()
        .map(|item| AdjustedInvestmentPhase {
            phase: item.phase.clone(),
            investment_m: item.base_investment_m * factor,
            timeline: item.timeline.clone(),
            focus: item.focus.clone(),
        })
        .collect()
}

/// Scales digital revenue only; traditional revenue passes through.
pub fn compute_adjusted_revenue(
    base: &[BaseRevenueYear],
    revenue_multiplier: Multiplier,
) -> Vec<AdjustedRevenueYear> {
    let factor = revenue_multiplier.value();
    base.iter()
        .map(|item| {
            let digital_m = item.base_digital_m * factor;
            AdjustedRevenueYear {
                year: item.year.clone(),
                digital_m,
                traditional_m: item.traditional_m,
                total_m: item.traditional_m + digital_m,
            }
        })
        .collect()
}

pub fn compute_adjusted_cost_savings(
    base: &[BaseCostSavingsCategory],
    cost_savings_multiplier: Multiplier,
) -> Vec<AdjustedCostSavingsCategory> {
    let factor = cost_savings_multiplier.value();
    base.iter()
        .map(|item| AdjustedCostSavingsCategory {
            category: item.category.clone(),
            savings_m: item.base_savings_m * factor,
            year1_m: item.year1_m * factor,
            year2_m: item.year2_m * factor,
            year3_m: item.year3_m * factor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::Baseline;

    #[test]
    fn investment_scaling_preserves_labels_and_order() {
        let baseline = Baseline::seeded();
        let adjusted = compute_adjusted_investment(&baseline.investment, Multiplier::new(1.5));

        let phases: Vec<&str> = adjusted.iter().map(|p| p.phase.as_str()).collect();
        assert_eq!(phases, vec!["Phase 1", "Phase 2", "Phase 3"]);
        assert_eq!(adjusted[0].investment_m, 18.0);
        assert_eq!(adjusted[1].investment_m, 27.0);
        assert_eq!(adjusted[2].investment_m, 12.0);
        assert_eq!(adjusted[1].timeline, "Months 7-12");
        assert_eq!(adjusted[2].focus, "Analytics & AI");
    }

    #[test]
    fn revenue_scaling_leaves_traditional_untouched() {
        let baseline = Baseline::seeded();
        let adjusted = compute_adjusted_revenue(&baseline.revenue, Multiplier::new(2.0));

        assert_eq!(adjusted.len(), 4);
        assert_eq!(adjusted[3].year, "Year 3");
        assert_eq!(adjusted[3].digital_m, 1600.0);
        assert_eq!(adjusted[3].traditional_m, 3628.0);
        assert_eq!(adjusted[3].total_m, 5228.0);
    }

    #[test]
    fn cost_savings_scaling_includes_ramp() {
        let baseline = Baseline::seeded();
        let adjusted = compute_adjusted_cost_savings(&baseline.cost_savings, Multiplier::new(0.5));

        assert_eq!(adjusted[0].category, "Labor Optimization");
        assert_eq!(adjusted[0].savings_m, 7.5);
        assert_eq!(adjusted[0].year1_m, 4.0);
        assert_eq!(adjusted[3].savings_m, 2.5);
    }

    #[test]
    fn neutral_multiplier_reproduces_base_values() {
        let baseline = Baseline::seeded();
        let neutral = Multiplier::NEUTRAL;

        for (adj, base) in compute_adjusted_investment(&baseline.investment, neutral)
            .iter()
            .zip(&baseline.investment)
        {
            assert_eq!(adj.investment_m, base.base_investment_m);
        }
        for (adj, base) in compute_adjusted_revenue(&baseline.revenue, neutral)
            .iter()
            .zip(&baseline.revenue)
        {
            assert_eq!(adj.digital_m, base.base_digital_m);
            assert_eq!(adj.total_m, base.total_m());
        }
        for (adj, base) in compute_adjusted_cost_savings(&baseline.cost_savings, neutral)
            .iter()
            .zip(&baseline.cost_savings)
        {
            assert_eq!(adj.savings_m, base.base_savings_m);
        }
    }

    #[test]
    fn empty_base_yields_empty_dataset() {
        assert!(compute_adjusted_investment(&[], Multiplier::new(1.3)).is_empty());
        assert!(compute_adjusted_revenue(&[], Multiplier::new(1.3)).is_empty());
        assert!(compute_adjusted_cost_savings(&[], Multiplier::new(1.3)).is_empty());
    }
}
