//! Scenario calculation engine.
//!
//! Pure core: every output is a function of one `ScenarioParameters` snapshot,
//! the fixed baseline datasets, and the `Assumptions`. [`evaluate`] builds the
//! whole output bundle in one step, so metrics and datasets can never disagree
//! about which parameters produced them.
//!
//! # Example
//!
//! ```rust
//! use investcase::engine::ScenarioModel;
//! use investcase::ScenarioParameters;
//!
//! let model = ScenarioModel::default();
//! let outputs = model.evaluate(&ScenarioParameters::default());
//!
//! assert_eq!(outputs.metrics.roi_percent, Some(6079));
//! assert_eq!(outputs.investment.len(), 3);
//! assert_eq!(outputs.roi_timeline[2].cumulative, 6079);
//! ```

pub mod assumptions;
pub mod datasets;
pub mod metrics;
pub mod scenarios;
pub mod timeline;

pub use assumptions::{Assumptions, NpvMethod};
pub use datasets::{
    compute_adjusted_cost_savings, compute_adjusted_investment, compute_adjusted_revenue,
};
pub use metrics::{compute_derived_metrics, compute_headline, round_half_up};
pub use scenarios::{compute_scenario_bands, ScenarioPreset};
pub use timeline::compute_roi_timeline;

use crate::baseline::Baseline;
use crate::core::{ScenarioOutputs, ScenarioParameters};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Baseline datasets plus formula assumptions: everything except the levers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioModel {
    pub baseline: Baseline,
    pub assumptions: Assumptions,
}

impl ScenarioModel {
    pub fn new(baseline: Baseline, assumptions: Assumptions) -> Self {
        Self {
            baseline,
            assumptions,
        }
    }

    /// Model whose base totals are derived from `baseline`.
    pub fn from_baseline(baseline: Baseline) -> Self {
        let assumptions = Assumptions::from_baseline(&baseline);
        Self::new(baseline, assumptions)
    }

    pub fn evaluate(&self, params: &ScenarioParameters) -> ScenarioOutputs {
        evaluate(params, &self.baseline, &self.assumptions)
    }
}

/// Compute every output for one parameter snapshot.
pub fn evaluate(
    params: &ScenarioParameters,
    baseline: &Baseline,
    assumptions: &Assumptions,
) -> ScenarioOutputs {
    let metrics = compute_derived_metrics(params, assumptions);
    let (roi_timeline, bands) = match metrics.roi_percent {
        Some(roi) => (compute_roi_timeline(roi), Some(compute_scenario_bands(roi))),
        None => (Vec::new(), None),
    };

    debug!(
        %params,
        roi = ?metrics.roi_percent,
        npv = ?metrics.npv_m,
        payback = ?metrics.payback_months,
        "scenario evaluated"
    );

    ScenarioOutputs {
        parameters: *params,
        metrics,
        headline: compute_headline(params, assumptions, baseline),
        investment: compute_adjusted_investment(&baseline.investment, params.investment_multiplier),
        revenue: compute_adjusted_revenue(&baseline.revenue, params.revenue_multiplier),
        cost_savings: compute_adjusted_cost_savings(
            &baseline.cost_savings,
            params.cost_savings_multiplier,
        ),
        roi_timeline,
        bands,
    }
}
