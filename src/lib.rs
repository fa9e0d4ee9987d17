//! Scenario model for a phased digital-transformation investment case.
//!
//! Four levers (investment, revenue and cost-savings multipliers plus a
//! discount rate) drive ROI, NPV, payback, headline figures, adjusted
//! datasets, an ROI timeline and conservative/optimistic bands.
//!
//! ```rust
//! use investcase::{ScenarioModel, ScenarioParameters};
//!
//! let outputs = ScenarioModel::default().evaluate(&ScenarioParameters::new(2.0, 1.0, 1.0, 10.0));
//! assert_eq!(outputs.metrics.roi_percent, Some(2989));
//! assert_eq!(outputs.metrics.payback_months, Some(1.2));
//! ```

pub mod baseline;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod effects;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod state;

pub use crate::baseline::{BaseTotals, Baseline};
pub use crate::config::{load_config, load_config_from_path, InvestcaseConfig};
pub use crate::core::{
    DerivedMetrics, DiscountRate, HeadlineFigures, Multiplier, RoiTimelinePoint, ScenarioBands,
    ScenarioOutputs, ScenarioParameters,
};
pub use crate::engine::{evaluate, Assumptions, NpvMethod, ScenarioModel, ScenarioPreset};
pub use crate::errors::{MetricKind, ModelError, ModelResult};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::state::{ScenarioObserver, ScenarioSnapshot, ScenarioState};
