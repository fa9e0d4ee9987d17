//! Core value types: scenario levers and the records the engine produces.

pub mod params;
pub mod types;

pub use params::{
    DiscountRate, Multiplier, ParameterRange, ScenarioParameters, COST_SAVINGS_RANGE,
    DISCOUNT_RATE_RANGE, INVESTMENT_RANGE, REVENUE_RANGE,
};
pub use types::{
    AdjustedCostSavingsCategory, AdjustedInvestmentPhase, AdjustedRevenueYear,
    BaseCostSavingsCategory, BaseInvestmentPhase, BaseRevenueYear, DerivedMetrics,
    HeadlineFigures, RoiTimelinePoint, ScenarioBands, ScenarioOutputs,
};
