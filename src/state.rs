//! Input State Holder: the four scenario levers and their derived outputs.
//!
//! Imperative shell around the pure engine. Every accepted change produces
//! exactly one recompute of the full output bundle, after which observers are
//! notified. Observers therefore never see metrics from one parameter snapshot
//! next to datasets from another.
//!
//! ```rust
//! use investcase::state::ScenarioState;
//! use investcase::engine::ScenarioModel;
//!
//! let mut state = ScenarioState::new(ScenarioModel::default());
//! assert!(state.set_investment_multiplier(2.0));
//! assert_eq!(state.outputs().headline.total_investment_m, 76);
//!
//! // Out-of-range input is clamped, not rejected
//! state.set_discount_rate(35.0);
//! assert_eq!(state.parameters().discount_rate_percent.percent(), 20);
//! ```

use crate::core::{DiscountRate, Multiplier, ScenarioOutputs, ScenarioParameters};
use crate::engine::{ScenarioModel, ScenarioPreset};
use tracing::{debug, warn};

/// What observers receive after each recompute.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSnapshot<'a> {
    /// Incremented once per recompute.
    pub revision: u64,
    pub outputs: &'a ScenarioOutputs,
}

/// Receives the output bundle after every recompute.
pub trait ScenarioObserver {
    fn on_recompute(&mut self, snapshot: ScenarioSnapshot<'_>);
}

impl<F> ScenarioObserver for F
where
    F: FnMut(ScenarioSnapshot<'_>),
{
    fn on_recompute(&mut self, snapshot: ScenarioSnapshot<'_>) {
        self(snapshot)
    }
}

/// Staged lever changes applied by [`ScenarioState::update`].
///
/// Setters clamp exactly like the holder's own setters; `NaN` is ignored.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDraft {
    params: ScenarioParameters,
}

impl ParameterDraft {
    pub fn set_investment_multiplier(&mut self, value: f64) -> &mut Self {
        if let Some(m) = accept_multiplier("investment_multiplier", value) {
            self.params.investment_multiplier = m;
        }
        self
    }

    pub fn set_revenue_multiplier(&mut self, value: f64) -> &mut Self {
        if let Some(m) = accept_multiplier("revenue_multiplier", value) {
            self.params.revenue_multiplier = m;
        }
        self
    }

    pub fn set_cost_savings_multiplier(&mut self, value: f64) -> &mut Self {
        if let Some(m) = accept_multiplier("cost_savings_multiplier", value) {
            self.params.cost_savings_multiplier = m;
        }
        self
    }

    pub fn set_discount_rate(&mut self, percent: f64) -> &mut Self {
        match DiscountRate::try_new(percent) {
            Ok(rate) => self.params.discount_rate_percent = rate,
            Err(_) => warn!(lever = "discount_rate_percent", "ignoring non-numeric input"),
        }
        self
    }

    pub fn parameters(&self) -> ScenarioParameters {
        self.params
    }
}

fn accept_multiplier(lever: &'static str, value: f64) -> Option<Multiplier> {
    match Multiplier::try_new(value) {
        Ok(m) => Some(m),
        Err(_) => {
            warn!(lever, "ignoring non-numeric input");
            None
        }
    }
}

pub struct ScenarioState {
    model: ScenarioModel,
    params: ScenarioParameters,
    outputs: ScenarioOutputs,
    revision: u64,
    observers: Vec<Box<dyn ScenarioObserver>>,
}

impl std::fmt::Debug for ScenarioState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioState")
            .field("params", &self.params)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ScenarioState {
    /// Holder at the default lever positions, evaluated once.
    pub fn new(model: ScenarioModel) -> Self {
        Self::with_parameters(model, ScenarioParameters::default())
    }

    pub fn with_parameters(model: ScenarioModel, params: ScenarioParameters) -> Self {
        let outputs = model.evaluate(&params);
        Self {
            model,
            params,
            outputs,
            revision: 0,
            observers: Vec::new(),
        }
    }

    pub fn parameters(&self) -> ScenarioParameters {
        self.params
    }

    pub fn outputs(&self) -> &ScenarioOutputs {
        &self.outputs
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn model(&self) -> &ScenarioModel {
        &self.model
    }

    pub fn snapshot(&self) -> ScenarioSnapshot<'_> {
        ScenarioSnapshot {
            revision: self.revision,
            outputs: &self.outputs,
        }
    }

    pub fn subscribe(&mut self, observer: impl ScenarioObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns `true` if the clamped value changed the lever.
    pub fn set_investment_multiplier(&mut self, value: f64) -> bool {
        self.update(|d| {
            d.set_investment_multiplier(value);
        })
    }

    pub fn set_revenue_multiplier(&mut self, value: f64) -> bool {
        self.update(|d| {
            d.set_revenue_multiplier(value);
        })
    }

    pub fn set_cost_savings_multiplier(&mut self, value: f64) -> bool {
        self.update(|d| {
            d.set_cost_savings_multiplier(value);
        })
    }

    pub fn set_discount_rate(&mut self, percent: f64) -> bool {
        self.update(|d| {
            d.set_discount_rate(percent);
        })
    }

    /// Stage any number of lever changes and recompute at most once.
    ///
    /// ```rust
    /// # use investcase::state::ScenarioState;
    /// # use investcase::engine::ScenarioModel;
    /// let mut state = ScenarioState::new(ScenarioModel::default());
    /// state.update(|draft| {
    ///     draft.set_revenue_multiplier(1.5).set_discount_rate(8.0);
    /// });
    /// assert_eq!(state.revision(), 1);
    /// ```
    pub fn update(&mut self, stage: impl FnOnce(&mut ParameterDraft)) -> bool {
        let mut draft = ParameterDraft {
            params: self.params,
        };
        stage(&mut draft);
        self.replace_parameters(draft.params)
    }

    pub fn apply_preset(&mut self, preset: ScenarioPreset) -> bool {
        self.replace_parameters(preset.parameters())
    }

    /// Install a full parameter snapshot; no-op if nothing changed.
    pub fn replace_parameters(&mut self, params: ScenarioParameters) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.outputs = self.model.evaluate(&self.params);
        self.revision += 1;
        debug!(revision = self.revision, params = %self.params, "scenario recomputed");

        let snapshot = ScenarioSnapshot {
            revision: self.revision,
            outputs: &self.outputs,
        };
        for observer in &mut self.observers {
            observer.on_recompute(snapshot);
        }
    }
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self::new(ScenarioModel::default())
    }
}
