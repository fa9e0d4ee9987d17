//! Clamped scenario levers.
//!
//! The four scenario inputs live in closed ranges. Rather than re-checking the
//! ranges at every use site, the values are wrapped in newtypes that clamp and
//! snap to their step grid on construction, so a `ScenarioParameters` can never
//! hold an out-of-range value.
//!
//! # Examples
//!
//! ```rust
//! use investcase::core::params::{DiscountRate, Multiplier};
//!
//! // Out-of-range values are clamped
//! assert_eq!(Multiplier::new(3.7).value(), 2.0);
//! assert_eq!(Multiplier::new(0.1).value(), 0.5);
//!
//! // Values snap to the 0.1 step grid
//! assert_eq!(Multiplier::new(1.26).value(), 1.3);
//!
//! // Discount rates are whole percentages
//! assert_eq!(DiscountRate::new(12.4).percent(), 12);
//! assert_eq!(DiscountRate::new(99.0).percent(), 20);
//! ```

use crate::errors::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// Declared range and step of one scenario lever.
///
/// Presentation layers use this to configure sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range and snap to the step grid.
    ///
    /// `+inf` maps to `max` and `-inf` to `min`. `NaN` passes through and must
    /// be filtered by the caller.
    pub fn clamp(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // Re-derive from the step count so 0.1 increments stay exact to one decimal.
        let snapped = self.min + steps * self.step;
        (snapped * 1e6).round() / 1e6
    }

    fn check(&self, value: f64) -> ModelResult<()> {
        if value.is_finite() && self.contains(value) {
            Ok(())
        } else {
            Err(ModelError::InvalidParameter {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const INVESTMENT_RANGE: ParameterRange = ParameterRange {
    name: "investment_multiplier",
    min: 0.5,
    max: 2.0,
    step: 0.1,
};

pub const REVENUE_RANGE: ParameterRange = ParameterRange {
    name: "revenue_multiplier",
    min: 0.5,
    max: 2.0,
    step: 0.1,
};

pub const COST_SAVINGS_RANGE: ParameterRange = ParameterRange {
    name: "cost_savings_multiplier",
    min: 0.5,
    max: 2.0,
    step: 0.1,
};

pub const DISCOUNT_RATE_RANGE: ParameterRange = ParameterRange {
    name: "discount_rate_percent",
    min: 5.0,
    max: 20.0,
    step: 1.0,
};

/// Scenario multiplier in [0.5, 2.0], step 0.1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;
    pub const NEUTRAL: Multiplier = Multiplier(1.0);

    /// Create a multiplier, clamping and snapping to the step grid.
    ///
    /// `NaN` maps to the neutral multiplier; use [`Multiplier::try_new`] to
    /// detect it instead.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(INVESTMENT_RANGE.clamp(value))
    }

    /// Create a multiplier, rejecting `NaN` but clamping everything else.
    pub fn try_new(value: f64) -> ModelResult<Self> {
        if value.is_nan() {
            return Err(ModelError::InvalidParameter {
                name: "multiplier",
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self::new(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(m: Multiplier) -> f64 {
        m.0
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

/// Discount rate as a whole percentage in [5, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate(u8);

impl DiscountRate {
    pub const MIN_PERCENT: u8 = 5;
    pub const MAX_PERCENT: u8 = 20;
    pub const DEFAULT_PERCENT: u8 = 10;

    /// Create a discount rate, clamping and rounding to a whole percent.
    ///
    /// `NaN` maps to the default rate.
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        // Range clamp guarantees the value fits in u8.
        Self(DISCOUNT_RATE_RANGE.clamp(percent) as u8)
    }

    pub fn try_new(percent: f64) -> ModelResult<Self> {
        if percent.is_nan() {
            return Err(ModelError::InvalidParameter {
                name: DISCOUNT_RATE_RANGE.name,
                value: percent,
                min: DISCOUNT_RATE_RANGE.min,
                max: DISCOUNT_RATE_RANGE.max,
            });
        }
        Ok(Self::new(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Rate as a fraction, e.g. 0.10 for 10%.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> f64 {
        f64::from(rate.0)
    }
}

impl std::fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The four scenario levers as one immutable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioParameters {
    #[serde(default)]
    pub investment_multiplier: Multiplier,
    #[serde(default)]
    pub revenue_multiplier: Multiplier,
    #[serde(default)]
    pub cost_savings_multiplier: Multiplier,
    #[serde(default)]
    pub discount_rate_percent: DiscountRate,
}

impl ScenarioParameters {
    /// Build parameters from raw values, clamping each into range.
    pub fn new(investment: f64, revenue: f64, cost_savings: f64, discount_percent: f64) -> Self {
        Self {
            investment_multiplier: Multiplier::new(investment),
            revenue_multiplier: Multiplier::new(revenue),
            cost_savings_multiplier: Multiplier::new(cost_savings),
            discount_rate_percent: DiscountRate::new(discount_percent),
        }
    }

    /// Build parameters from raw values, rejecting any out-of-range input.
    ///
    /// In-range values are still snapped to their step grid.
    pub fn try_new(
        investment: f64,
        revenue: f64,
        cost_savings: f64,
        discount_percent: f64,
    ) -> ModelResult<Self> {
        INVESTMENT_RANGE.check(investment)?;
        REVENUE_RANGE.check(revenue)?;
        COST_SAVINGS_RANGE.check(cost_savings)?;
        DISCOUNT_RATE_RANGE.check(discount_percent)?;
        Ok(Self::new(investment, revenue, cost_savings, discount_percent))
    }

    /// Declared ranges in lever order: investment, revenue, cost savings, discount.
    pub fn ranges() -> [ParameterRange; 4] {
        [
            INVESTMENT_RANGE,
            REVENUE_RANGE,
            COST_SAVINGS_RANGE,
            DISCOUNT_RATE_RANGE,
        ]
    }
}

impl std::fmt::Display for ScenarioParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "investment={} revenue={} cost_savings={} discount={}",
            self.investment_multiplier,
            self.revenue_multiplier,
            self.cost_savings_multiplier,
            self.discount_rate_percent
        )
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn multiplier_always_in_range(value in -100.0..100.0f64) {
            let m = Multiplier::new(value);
            prop_assert!(m.value() >= Multiplier::MIN && m.value() <= Multiplier::MAX);
        }

        #[test]
        fn multiplier_is_on_step_grid(value in 0.0..3.0f64) {
            let tenths = Multiplier::new(value).value() * 10.0;
            prop_assert!((tenths - tenths.round()).abs() < 1e-9);
        }

        #[test]
        fn clamping_is_idempotent(value in -10.0..10.0f64) {
            let once = Multiplier::new(value);
            prop_assert_eq!(Multiplier::new(once.value()), once);
        }

        #[test]
        fn discount_rate_always_in_range(value in -1000.0..1000.0f64) {
            let rate = DiscountRate::new(value).percent();
            prop_assert!((DiscountRate::MIN_PERCENT..=DiscountRate::MAX_PERCENT).contains(&rate));
        }
    }
}
