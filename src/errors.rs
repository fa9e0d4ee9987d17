//! Error types for the scenario engine.
//!
//! Variants:
//!
//! - `InvalidParameter`: a scenario lever received a value outside its declared
//!   range (or `NaN`). The Input State Holder resolves these by clamping; only
//!   the strict constructors surface them.
//! - `UndefinedMetric`: a division guard fired while computing a metric. The
//!   engine itself reports this as a `None` sentinel; the error form exists for
//!   callers that require a complete metric set.
//! - `Config` / `Io`: configuration loading and validation failures.
//!
//! # Example
//!
//! ```rust
//! use investcase::errors::ModelError;
//!
//! let err = ModelError::config("horizon_years must be at least 1");
//! assert!(err.is_user_fixable());
//! assert_eq!(err.to_string(), "configuration error: horizon_years must be at least 1");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for engine and configuration operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Metric identifiers used when reporting undefined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Roi,
    Npv,
    Payback,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Roi => "roi",
            MetricKind::Npv => "npv",
            MetricKind::Payback => "payback",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A parameter was non-finite or outside its declared closed range.
    #[error("parameter '{name}' out of range: {value} (expected {min} to {max})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A metric could not be computed without dividing by zero.
    #[error("metric '{metric}' is undefined: {reason}")]
    UndefinedMetric {
        metric: MetricKind,
        reason: &'static str,
    },

    /// Configuration file or value errors.
    #[error("configuration error{}: {message}", path_suffix(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File system errors while reading or writing configuration.
    #[error("I/O error{}: {message}", path_suffix(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

impl ModelError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn undefined(metric: MetricKind, reason: &'static str) -> Self {
        Self::UndefinedMetric { metric, reason }
    }

    /// Whether the user can resolve this error by editing input or config.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. } | Self::Config { .. })
    }

    /// Attach a path to config or I/O errors that do not carry one yet.
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Config {
                message,
                path: None,
            } => Self::Config {
                message,
                path: Some(new_path.into()),
            },
            Self::Io {
                message,
                path: None,
            } => Self::Io {
                message,
                path: Some(new_path.into()),
            },
            other => other,
        }
    }
}

/// Collapse accumulated errors into a single `anyhow::Error`.
pub fn errors_to_anyhow(errors: Vec<ModelError>) -> anyhow::Error {
    match errors.len() {
        0 => anyhow::anyhow!("unknown error"),
        1 => errors
            .into_iter()
            .next()
            .map(anyhow::Error::new)
            .unwrap_or_else(|| anyhow::anyhow!("unknown error")),
        n => {
            let lines: Vec<String> = errors
                .iter()
                .enumerate()
                .map(|(i, e)| format!("  {}. {}", i + 1, e))
                .collect();
            anyhow::anyhow!("{} errors occurred:\n{}", n, lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ModelError::InvalidParameter {
            name: "discount_rate_percent",
            value: 42.0,
            min: 5.0,
            max: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "parameter 'discount_rate_percent' out of range: 42 (expected 5 to 20)"
        );
        assert!(err.is_user_fixable());
    }

    #[test]
    fn test_undefined_metric_display() {
        let err = ModelError::undefined(MetricKind::Roi, "total investment is zero");
        assert_eq!(
            err.to_string(),
            "metric 'roi' is undefined: total investment is zero"
        );
        assert!(!err.is_user_fixable());
    }

    #[test]
    fn test_config_error_with_path() {
        let err = ModelError::config("bad horizon").with_path("/tmp/.investcase.toml");
        assert_eq!(
            err.to_string(),
            "configuration error in /tmp/.investcase.toml: bad horizon"
        );
    }

    #[test]
    fn test_with_path_keeps_existing_path() {
        let err = ModelError::io_with_path("denied", "a.toml").with_path("b.toml");
        assert_eq!(err.to_string(), "I/O error in a.toml: denied");
    }

    #[test]
    fn test_errors_to_anyhow_lists_all() {
        let err = errors_to_anyhow(vec![
            ModelError::config("first"),
            ModelError::config("second"),
        ]);
        let message = err.to_string();
        assert!(message.starts_with("2 errors occurred:"));
        assert!(message.contains("1. configuration error: first"));
        assert!(message.contains("2. configuration error: second"));
    }
}
