//! Value records shared by the baseline, the engine, and the presentation layer.
//!
//! All figures are flat numbers in millions of dollars. Records carry no
//! identity beyond their fields and are rebuilt on every recompute.

use super::params::ScenarioParameters;
use crate::errors::{MetricKind, ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// One investment phase of the programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseInvestmentPhase {
    pub phase: String,
    pub base_investment_m: f64,
    pub timeline: String,
    pub focus: String,
}

/// One year of the revenue projection. `traditional_m` is never scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRevenueYear {
    pub year: String,
    pub base_digital_m: f64,
    pub traditional_m: f64,
}

impl BaseRevenueYear {
    pub fn total_m(&self) -> f64 {
        self.traditional_m + self.base_digital_m
    }
}

/// One cost-savings category with its annual run rate and three-year ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCostSavingsCategory {
    pub category: String,
    pub base_savings_m: f64,
    #[serde(default)]
    pub year1_m: f64,
    #[serde(default)]
    pub year2_m: f64,
    #[serde(default)]
    pub year3_m: f64,
}

impl BaseCostSavingsCategory {
    pub fn ramp_total_m(&self) -> f64 {
        self.year1_m + self.year2_m + self.year3_m
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedInvestmentPhase {
    pub phase: String,
    pub investment_m: f64,
    pub timeline: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedRevenueYear {
    pub year: String,
    pub digital_m: f64,
    pub traditional_m: f64,
    pub total_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCostSavingsCategory {
    pub category: String,
    pub savings_m: f64,
    pub year1_m: f64,
    pub year2_m: f64,
    pub year3_m: f64,
}

/// Top-line metrics. `None` marks a metric that a division guard left undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub roi_percent: Option<i64>,
    pub npv_m: Option<i64>,
    pub payback_months: Option<f64>,
}

impl DerivedMetrics {
    pub fn is_complete(&self) -> bool {
        self.roi_percent.is_some() && self.npv_m.is_some() && self.payback_months.is_some()
    }

    pub fn undefined_metrics(&self) -> Vec<MetricKind> {
        let mut missing = Vec::new();
        if self.roi_percent.is_none() {
            missing.push(MetricKind::Roi);
        }
        if self.npv_m.is_none() {
            missing.push(MetricKind::Npv);
        }
        if self.payback_months.is_none() {
            missing.push(MetricKind::Payback);
        }
        missing
    }

    /// Unwrap all three metrics or report the first undefined one.
    pub fn require_complete(&self) -> ModelResult<(i64, i64, f64)> {
        let roi = self
            .roi_percent
            .ok_or_else(|| ModelError::undefined(MetricKind::Roi, "total investment is zero"))?;
        let npv = self
            .npv_m
            .ok_or_else(|| ModelError::undefined(MetricKind::Npv, "analysis horizon is zero"))?;
        let payback = self.payback_months.ok_or_else(|| {
            ModelError::undefined(MetricKind::Payback, "annual benefit is zero")
        })?;
        Ok((roi, npv, payback))
    }
}

/// One year of the ROI timeline chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiTimelinePoint {
    pub year: String,
    pub roi: i64,
    pub cumulative: i64,
}

/// Headline figures shown next to the metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineFigures {
    pub total_investment_m: i64,
    pub revenue_benefit_m: i64,
    pub annual_cost_savings_m: i64,
}

/// Conservative / most likely / optimistic ROI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioBands {
    pub conservative_roi_percent: i64,
    pub most_likely_roi_percent: i64,
    pub optimistic_roi_percent: i64,
}

/// Every output of one recompute, derived from a single parameter snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutputs {
    pub parameters: ScenarioParameters,
    pub metrics: DerivedMetrics,
    pub headline: HeadlineFigures,
    pub investment: Vec<AdjustedInvestmentPhase>,
    pub revenue: Vec<AdjustedRevenueYear>,
    pub cost_savings: Vec<AdjustedCostSavingsCategory>,
    /// Empty when ROI is undefined.
    pub roi_timeline: Vec<RoiTimelinePoint>,
    pub bands: Option<ScenarioBands>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_total_adds_traditional_and_digital() {
        let year = BaseRevenueYear {
            year: "Year 1".to_string(),
            base_digital_m: 192.0,
            traditional_m: 3292.0,
        };
        assert_eq!(year.total_m(), 3484.0);
    }

    #[test]
    fn undefined_metrics_lists_missing_fields() {
        let metrics = DerivedMetrics {
            roi_percent: None,
            npv_m: Some(12),
            payback_months: None,
        };
        assert!(!metrics.is_complete());
        assert_eq!(
            metrics.undefined_metrics(),
            vec![MetricKind::Roi, MetricKind::Payback]
        );
    }

    #[test]
    fn require_complete_reports_first_missing_metric() {
        let metrics = DerivedMetrics {
            roi_percent: Some(10),
            npv_m: Some(5),
            payback_months: None,
        };
        assert!(matches!(
            metrics.require_complete(),
            Err(ModelError::UndefinedMetric {
                metric: MetricKind::Payback,
                ..
            })
        ));

        let complete = DerivedMetrics {
            payback_months: Some(3.5),
            ..metrics
        };
        assert_eq!(complete.require_complete().unwrap(), (10, 5, 3.5));
    }
}
