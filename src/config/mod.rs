//! Configuration for the scenario model.
//!
//! A project may carry a `.investcase.toml` that sets the starting lever
//! positions, overrides formula assumptions, or replaces the base datasets.
//! Discovery walks up from the working directory, then falls back to the
//! per-user config; a missing file simply means defaults.

mod core;
mod loader;
pub mod validation;

pub use self::core::{AssumptionsConfig, BaselineConfig, InvestcaseConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    user_config_path, CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result};

/// Written by `investcase init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# investcase configuration

# Starting lever positions: "conservative", "baseline" or "optimistic".
# Ignored when [parameters] is present.
preset = "baseline"

# [parameters]
# investment_multiplier = 1.0     # 0.5 - 2.0
# revenue_multiplier = 1.0        # 0.5 - 2.0
# cost_savings_multiplier = 1.0   # 0.5 - 2.0
# discount_rate_percent = 10      # 5 - 20

[assumptions]
horizon_years = 3
# "level-annuity" discounts the average annual benefit over each year of the
# horizon; "horizon-discount" discounts the whole benefit by (1+r)^-H.
npv_method = "level-annuity"

# Base totals are derived from the datasets below unless set here.
# base_investment_total_m = 38.0
# base_benefit_total_m = 2248.0
# base_cost_savings_total_m = 100.0

# Replace any dataset by listing its rows, e.g.
# [[baseline.investment]]
# phase = "Phase 1"
# base_investment_m = 12.0
# timeline = "Months 1-6"
# focus = "Infrastructure"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScenarioModel;

    #[test]
    fn default_template_is_valid_and_neutral() {
        let config = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(validate_config(&config).is_success());
        assert_eq!(config.build_model(), ScenarioModel::default());
        assert_eq!(
            config.initial_parameters(),
            crate::core::ScenarioParameters::default()
        );
    }
}
