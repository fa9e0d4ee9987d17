//! Top-line financial metrics: ROI, NPV, payback.
//!
//! Every function here is pure. Division guards return `None` instead of
//! letting `NaN` or infinity reach the presentation layer.

use super::assumptions::{Assumptions, NpvMethod};
use crate::baseline::Baseline;
use crate::core::{DerivedMetrics, HeadlineFigures, ScenarioParameters};
use tracing::warn;

/// Round half up (toward positive infinity), matching chart tooling.
///
/// `f64::round` rounds half away from zero, which differs on negative halves:
/// `round_half_up(-2.5) == -2.0` while `(-2.5f64).round() == -3.0`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// `2^63`, the first value past the top of the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Round to an integer, or `None` if the value is not finite or does not fit
/// in an `i64`.
pub fn round_to_int(value: f64) -> Option<i64> {
    let rounded = round_half_up(value);
    if rounded.is_finite() && rounded >= -I64_BOUND && rounded < I64_BOUND {
        Some(rounded as i64)
    } else {
        warn!(value, "figure cannot be represented as a whole number");
        None
    }
}

/// Scaled totals for one parameter snapshot, in $M over the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioTotals {
    pub investment_m: f64,
    pub revenue_benefit_m: f64,
    pub cost_savings_m: f64,
}

impl ScenarioTotals {
    pub fn benefit_m(&self) -> f64 {
        self.revenue_benefit_m + self.cost_savings_m
    }
}

pub fn scenario_totals(params: &ScenarioParameters, assumptions: &Assumptions) -> ScenarioTotals {
    let base = &assumptions.totals;
    ScenarioTotals {
        investment_m: base.investment_m * params.investment_multiplier.value(),
        revenue_benefit_m: base.revenue_benefit_m * params.revenue_multiplier.value(),
        cost_savings_m: base.cost_savings_m * params.cost_savings_multiplier.value(),
    }
}

/// `(benefit - investment) / investment * 100`, rounded.
pub fn roi_percent(totals: &ScenarioTotals) -> Option<i64> {
    if totals.investment_m == 0.0 {
        warn!("ROI undefined: total investment is zero");
        return None;
    }
    round_to_int((totals.benefit_m() - totals.investment_m) / totals.investment_m * 100.0)
}

/// Net present value of the benefit less the investment, rounded to $M.
pub fn npv_m(
    totals: &ScenarioTotals,
    discount_fraction: f64,
    horizon_years: u32,
    method: NpvMethod,
) -> Option<i64> {
    if horizon_years == 0 {
        warn!("NPV undefined: analysis horizon is zero years");
        return None;
    }
    let growth = 1.0 + discount_fraction;
    let present_benefit = match method {
        NpvMethod::LevelAnnuity => {
            let annual = totals.benefit_m() / f64::from(horizon_years);
            (1..=horizon_years)
                .map(|year| annual / growth.powi(year as i32))
                .sum::<f64>()
        }
        NpvMethod::HorizonDiscount => {
            totals.benefit_m() * (1.0 - 1.0 / growth.powi(horizon_years as i32))
        }
    };
    round_to_int(present_benefit - totals.investment_m)
}

/// Months until linear cumulative benefit covers the investment, one decimal.
pub fn payback_months(totals: &ScenarioTotals, horizon_years: u32) -> Option<f64> {
    if horizon_years == 0 || totals.benefit_m() == 0.0 {
        warn!(
            horizon_years,
            benefit_m = totals.benefit_m(),
            "payback undefined: no annual benefit"
        );
        return None;
    }
    let annual_benefit = totals.benefit_m() / f64::from(horizon_years);
    let months = totals.investment_m / annual_benefit * 12.0;
    months.is_finite().then(|| round_to_tenth(months))
}

/// ROI, NPV, and payback for one parameter snapshot.
pub fn compute_derived_metrics(
    params: &ScenarioParameters,
    assumptions: &Assumptions,
) -> DerivedMetrics {
    let totals = scenario_totals(params, assumptions);
    DerivedMetrics {
        roi_percent: roi_percent(&totals),
        npv_m: npv_m(
            &totals,
            params.discount_rate_percent.fraction(),
            assumptions.horizon_years,
            assumptions.npv_method,
        ),
        payback_months: payback_months(&totals, assumptions.horizon_years),
    }
}

/// Rounded totals for the headline cards.
pub fn compute_headline(
    params: &ScenarioParameters,
    assumptions: &Assumptions,
    baseline: &Baseline,
) -> HeadlineFigures {
    let totals = scenario_totals(params, assumptions);
    let annual_savings = baseline.annual_cost_savings_m() * params.cost_savings_multiplier.value();
    HeadlineFigures {
        total_investment_m: round_to_int(totals.investment_m).unwrap_or_default(),
        revenue_benefit_m: round_to_int(totals.revenue_benefit_m).unwrap_or_default(),
        annual_cost_savings_m: round_to_int(annual_savings).unwrap_or_default(),
    }
}
