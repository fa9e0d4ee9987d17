use crate::cli;
use crate::config::{self, InvestcaseConfig};
use crate::core::{ScenarioOutputs, ScenarioParameters};
use crate::engine::ScenarioPreset;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::state::{ScenarioSnapshot, ScenarioState};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct EvaluateConfig {
    pub investment: Option<f64>,
    pub revenue: Option<f64>,
    pub cost_savings: Option<f64>,
    pub discount_rate: Option<f64>,
    pub preset: Option<cli::Preset>,
    pub config: Option<PathBuf>,
    pub format: cli::OutputFormat,
    pub plain: bool,
}

impl EvaluateConfig {
    fn has_overrides(&self) -> bool {
        self.investment.is_some()
            || self.revenue.is_some()
            || self.cost_savings.is_some()
            || self.discount_rate.is_some()
    }

    fn formatting(&self) -> FormattingConfig {
        if self.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        }
    }
}

pub fn evaluate_scenario(config: EvaluateConfig) -> Result<()> {
    let file_config = match config.config {
        Some(ref path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };

    let outputs = compute_outputs(&config, &file_config);
    report_undefined_metrics(&outputs);

    let format: OutputFormat = config.format.into();
    let mut writer = create_writer(format, config.formatting());
    writer.write_outputs(&outputs)
}

/// Levers start from the preset flag, then the config file, then defaults;
/// individual flags are applied on top as one batched change.
pub fn compute_outputs(config: &EvaluateConfig, file_config: &InvestcaseConfig) -> ScenarioOutputs {
    let start = starting_parameters(config.preset.map(ScenarioPreset::from), file_config);
    let mut state = ScenarioState::with_parameters(file_config.build_model(), start);
    state.subscribe(|snapshot: ScenarioSnapshot<'_>| {
        debug!(
            revision = snapshot.revision,
            params = %snapshot.outputs.parameters,
            "levers overridden from the command line"
        );
    });

    if config.has_overrides() {
        state.update(|draft| {
            if let Some(v) = config.investment {
                draft.set_investment_multiplier(v);
            }
            if let Some(v) = config.revenue {
                draft.set_revenue_multiplier(v);
            }
            if let Some(v) = config.cost_savings {
                draft.set_cost_savings_multiplier(v);
            }
            if let Some(v) = config.discount_rate {
                draft.set_discount_rate(v);
            }
        });
    }

    info!(params = %state.parameters(), "evaluating scenario");
    state.outputs().clone()
}

fn starting_parameters(
    preset: Option<ScenarioPreset>,
    file_config: &InvestcaseConfig,
) -> ScenarioParameters {
    match preset {
        Some(preset) => preset.parameters(),
        None => file_config.initial_parameters(),
    }
}

fn report_undefined_metrics(outputs: &ScenarioOutputs) {
    for metric in outputs.metrics.undefined_metrics() {
        warn!(metric = %metric, "metric is undefined for this scenario");
    }
}
