//! CLI command implementations.
//!
//! - **evaluate**: compute one scenario and print it as terminal text, JSON or Markdown
//! - **init**: write a starter `.investcase.toml`

pub mod evaluate;
pub mod init;

pub use evaluate::{evaluate_scenario, EvaluateConfig};
pub use init::init_config;
