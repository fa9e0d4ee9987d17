use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::engine::ScenarioPreset;

#[derive(Parser, Debug)]
#[command(name = "investcase")]
#[command(about = "What-if ROI, NPV and payback for a phased investment programme", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one scenario and print its metrics and datasets
    Evaluate {
        /// Investment multiplier (0.5 - 2.0, step 0.1)
        #[arg(long, allow_negative_numbers = true)]
        investment: Option<f64>,

        /// Revenue multiplier (0.5 - 2.0, step 0.1)
        #[arg(long, allow_negative_numbers = true)]
        revenue: Option<f64>,

        /// Cost savings multiplier (0.5 - 2.0, step 0.1)
        #[arg(long = "cost-savings", allow_negative_numbers = true)]
        cost_savings: Option<f64>,

        /// Discount rate in percent (5 - 20)
        #[arg(long = "discount-rate", allow_negative_numbers = true)]
        discount_rate: Option<f64>,

        /// Start from a named preset instead of the configured levers
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Configuration file (defaults to discovering .investcase.toml)
        #[arg(short, long, env = "INVESTCASE_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a starter .investcase.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Cost overrun, weaker benefits, 12% discount rate
    Conservative,
    /// Every lever at its initial position
    #[value(alias = "default")]
    Baseline,
    /// Leaner delivery, stronger benefits, 8% discount rate
    Optimistic,
}

impl From<Preset> for ScenarioPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Conservative => ScenarioPreset::Conservative,
            Preset::Baseline => ScenarioPreset::Baseline,
            Preset::Optimistic => ScenarioPreset::Optimistic,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_preset_conversion() {
        assert_eq!(
            ScenarioPreset::from(Preset::Conservative),
            ScenarioPreset::Conservative
        );
        assert_eq!(ScenarioPreset::from(Preset::Baseline), ScenarioPreset::Baseline);
        assert_eq!(
            ScenarioPreset::from(Preset::Optimistic),
            ScenarioPreset::Optimistic
        );
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_evaluate_command() {
        let args = vec![
            "investcase",
            "evaluate",
            "--investment",
            "1.5",
            "--discount-rate",
            "12",
            "--format",
            "json",
            "-vv",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Evaluate {
                investment,
                revenue,
                discount_rate,
                format,
                verbosity,
                plain,
                ..
            } => {
                assert_eq!(investment, Some(1.5));
                assert_eq!(revenue, None);
                assert_eq!(discount_rate, Some(12.0));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(verbosity, 2);
                assert!(!plain);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parsing_preset() {
        let cli = Cli::parse_from(["investcase", "evaluate", "--preset", "optimistic"]);
        match cli.command {
            Commands::Evaluate { preset, format, .. } => {
                assert_eq!(preset, Some(Preset::Optimistic));
                assert_eq!(format, OutputFormat::Terminal);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parsing_preset_alias() {
        let cli = Cli::parse_from(["investcase", "evaluate", "--preset", "default"]);
        match cli.command {
            Commands::Evaluate { preset, .. } => assert_eq!(preset, Some(Preset::Baseline)),
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["investcase", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_preset() {
        let result = Cli::try_parse_from(["investcase", "evaluate", "--preset", "reckless"]);
        assert!(result.is_err());
    }
}
