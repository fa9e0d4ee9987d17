use anyhow::Result;
use clap::Parser;
use investcase::cli::{Cli, Commands};
use investcase::commands::{self, EvaluateConfig};
use investcase::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            investment,
            revenue,
            cost_savings,
            discount_rate,
            preset,
            config,
            format,
            plain,
            verbosity,
        } => {
            init_tracing(verbosity);
            commands::evaluate_scenario(EvaluateConfig {
                investment,
                revenue,
                cost_savings,
                discount_rate,
                preset,
                config,
                format,
                plain,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            commands::init_config(force)
        }
    }
}
