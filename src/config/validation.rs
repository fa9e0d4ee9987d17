//! Validation with error accumulation for configuration.
//!
//! Every check contributes to one `ModelValidation`, so a config file with
//! three mistakes reports all three.
//!
//! # Example
//!
//! ```rust
//! use investcase::config::validation::validate_config;
//! use investcase::config::InvestcaseConfig;
//!
//! let config = InvestcaseConfig::default();
//! assert!(validate_config(&config).is_success());
//! ```

use crate::core::{BaseCostSavingsCategory, BaseInvestmentPhase, BaseRevenueYear};
use crate::effects::{
    combine_validations, run_validation, validation_from_errors, validation_success,
    ModelValidation,
};
use crate::errors::ModelError;
use stillwater::Validation;

use super::core::{AssumptionsConfig, BaselineConfig};
use super::InvestcaseConfig;

pub const MAX_HORIZON_YEARS: u32 = 30;

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &InvestcaseConfig) -> ModelValidation<()> {
    let validations = vec![
        validate_assumptions(config.assumptions.as_ref()),
        validate_baseline(config.baseline.as_ref()),
    ];

    match combine_validations(validations) {
        Validation::Success(_) => validation_success(()),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

/// Validate config with fail-fast `anyhow` semantics.
pub fn validate_config_result(config: &InvestcaseConfig) -> anyhow::Result<()> {
    run_validation(validate_config(config))
}

fn check_figure(errors: &mut Vec<ModelError>, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ModelError::config(format!(
            "{} must be a finite, non-negative amount: {}",
            field, value
        )));
    }
}

fn check_label(errors: &mut Vec<ModelError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ModelError::config(format!("{} cannot be empty", field)));
    }
}

fn validate_assumptions(assumptions: Option<&AssumptionsConfig>) -> ModelValidation<()> {
    let Some(assumptions) = assumptions else {
        return validation_from_errors((), Vec::new());
    };

    let mut errors = Vec::new();

    if let Some(years) = assumptions.horizon_years {
        if years == 0 || years > MAX_HORIZON_YEARS {
            errors.push(ModelError::config(format!(
                "assumptions.horizon_years must be 1-{}: {}",
                MAX_HORIZON_YEARS, years
            )));
        }
    }

    let totals = [
        ("assumptions.base_investment_total_m", assumptions.base_investment_total_m),
        ("assumptions.base_benefit_total_m", assumptions.base_benefit_total_m),
        (
            "assumptions.base_cost_savings_total_m",
            assumptions.base_cost_savings_total_m,
        ),
    ];
    for (field, value) in totals {
        if let Some(value) = value {
            check_figure(&mut errors, field, value);
        }
    }

    validation_from_errors((), errors)
}

fn validate_baseline(baseline: Option<&BaselineConfig>) -> ModelValidation<()> {
    let Some(baseline) = baseline else {
        return validation_from_errors((), Vec::new());
    };

    let mut errors = Vec::new();

    if let Some(ref phases) = baseline.investment {
        errors.extend(validate_investment_phases(phases));
    }
    if let Some(ref years) = baseline.revenue {
        errors.extend(validate_revenue_years(years));
    }
    if let Some(ref categories) = baseline.cost_savings {
        errors.extend(validate_cost_savings(categories));
    }

    validation_from_errors((), errors)
}

fn validate_investment_phases(phases: &[BaseInvestmentPhase]) -> Vec<ModelError> {
    let mut errors = Vec::new();
    if phases.is_empty() {
        errors.push(ModelError::config(
            "baseline.investment must list at least one phase",
        ));
    }
    for (i, phase) in phases.iter().enumerate() {
        let prefix = format!("baseline.investment[{}]", i);
        check_label(&mut errors, &format!("{}.phase", prefix), &phase.phase);
        check_figure(
            &mut errors,
            &format!("{}.base_investment_m", prefix),
            phase.base_investment_m,
        );
    }
    errors
}

fn validate_revenue_years(years: &[BaseRevenueYear]) -> Vec<ModelError> {
    let mut errors = Vec::new();
    if years.len() < 2 {
        errors.push(ModelError::config(
            "baseline.revenue needs a baseline year followed by at least one projection year",
        ));
    }
    for (i, year) in years.iter().enumerate() {
        let prefix = format!("baseline.revenue[{}]", i);
        check_label(&mut errors, &format!("{}.year", prefix), &year.year);
        check_figure(
            &mut errors,
            &format!("{}.base_digital_m", prefix),
            year.base_digital_m,
        );
        check_figure(
            &mut errors,
            &format!("{}.traditional_m", prefix),
            year.traditional_m,
        );
    }
    errors
}

fn validate_cost_savings(categories: &[BaseCostSavingsCategory]) -> Vec<ModelError> {
    let mut errors = Vec::new();
    if categories.is_empty() {
        errors.push(ModelError::config(
            "baseline.cost_savings must list at least one category",
        ));
    }
    for (i, category) in categories.iter().enumerate() {
        let prefix = format!("baseline.cost_savings[{}]", i);
        check_label(&mut errors, &format!("{}.category", prefix), &category.category);
        for (field, value) in [
            ("base_savings_m", category.base_savings_m),
            ("year1_m", category.year1_m),
            ("year2_m", category.year2_m),
            ("year3_m", category.year3_m),
        ] {
            check_figure(&mut errors, &format!("{}.{}", prefix, field), value);
        }
    }
    errors
}
