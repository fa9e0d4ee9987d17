use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::core::InvestcaseConfig;
use super::validation::{validate_config, validate_config_result};
use crate::effects::validation_errors;
use crate::errors::{ModelError, ModelResult};

/// Project-local config file name searched for in the working directory and its parents
pub const CONFIG_FILE_NAME: &str = ".investcase.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string without validating it
pub fn parse_config(contents: &str) -> ModelResult<InvestcaseConfig> {
    toml::from_str::<InvestcaseConfig>(contents)
        .map_err(|e| ModelError::config(format!("failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load a config the user pointed at explicitly; any problem is an error.
pub fn load_config_from_path(path: &Path) -> anyhow::Result<InvestcaseConfig> {
    let contents = read_config_file(path)
        .map_err(|e| ModelError::io_with_path(e.to_string(), path))
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&contents).map_err(|e| e.with_path(path))?;
    validate_config_result(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Discovered configs fall back to defaults with a warning instead of failing.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<InvestcaseConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    let config = match parse_config(&contents) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %config_path.display(), "{}. Using defaults.", e);
            return None;
        }
    };

    let errors = validation_errors(validate_config(&config));
    if !errors.is_empty() {
        for error in &errors {
            warn!(path = %config_path.display(), "{}", error);
        }
        warn!(
            path = %config_path.display(),
            count = errors.len(),
            "ignoring invalid configuration. Using defaults."
        );
        return None;
    }

    info!(path = %config_path.display(), "loaded configuration");
    Some(config)
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Missing files are the normal case during discovery
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and up to `max_depth - 1` of its parents, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config at `<config dir>/investcase/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("investcase").join("config.toml"))
}

/// Search upward from `start` for `.investcase.toml`, then the user config.
pub fn discover_config(start: PathBuf) -> InvestcaseConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            InvestcaseConfig::default()
        })
}

pub fn load_config() -> InvestcaseConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            InvestcaseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{NpvMethod, ScenarioPreset};
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn parse_config_reads_every_section() {
        let config = parse_config(indoc! {r#"
            preset = "conservative"

            [parameters]
            investment_multiplier = 1.5
            discount_rate_percent = 8

            [assumptions]
            horizon_years = 5
            npv_method = "horizon-discount"

            [[baseline.investment]]
            phase = "Pilot"
            base_investment_m = 4.0
            timeline = "Months 1-6"
            focus = "Proof of value"
        "#})
        .unwrap();

        assert_eq!(config.preset, Some(ScenarioPreset::Conservative));
        let params = config.parameters.unwrap();
        assert_eq!(params.investment_multiplier.value(), 1.5);
        assert_eq!(params.revenue_multiplier.value(), 1.0);
        assert_eq!(params.discount_rate_percent.percent(), 8);

        let assumptions = config.assumptions.as_ref().unwrap();
        assert_eq!(assumptions.horizon_years, Some(5));
        assert_eq!(assumptions.npv_method, Some(NpvMethod::HorizonDiscount));

        let baseline = config.baseline.as_ref().unwrap();
        assert_eq!(baseline.investment.as_ref().unwrap()[0].phase, "Pilot");
        assert!(baseline.revenue.is_none());
    }

    #[test]
    fn parse_config_clamps_out_of_range_levers() {
        let config = parse_config(indoc! {r#"
            [parameters]
            revenue_multiplier = 9.0
            discount_rate_percent = 40
        "#})
        .unwrap();
        let params = config.parameters.unwrap();
        assert_eq!(params.revenue_multiplier.value(), 2.0);
        assert_eq!(params.discount_rate_percent.percent(), 20);
    }

    #[test]
    fn parse_config_accepts_name_aliases() {
        let config = parse_config(indoc! {r#"
            preset = "default"

            [assumptions]
            npv_method = "annuity"
        "#})
        .unwrap();
        assert_eq!(config.preset, Some(ScenarioPreset::Baseline));
        assert_eq!(
            config.assumptions.unwrap().npv_method,
            Some(NpvMethod::LevelAnnuity)
        );
    }

    #[test]
    fn parse_config_rejects_bad_toml() {
        let err = parse_config("[parameters\nbroken").unwrap_err();
        assert!(matches!(err, ModelError::Config { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn directory_ancestors_stops_at_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn discover_config_finds_parent_file() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("deck").join("q3");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "preset = \"optimistic\"\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.preset, Some(ScenarioPreset::Optimistic));
    }

    #[test]
    fn discover_config_skips_invalid_file() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[assumptions]\nhorizon_years = 0\n",
        )
        .unwrap();

        let config = try_load_config_from_path(&root.path().join(CONFIG_FILE_NAME));
        assert!(config.is_none());
    }

    #[test]
    fn explicit_path_reports_invalid_values() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(
            &path,
            indoc! {r#"
                [assumptions]
                horizon_years = 0
                base_benefit_total_m = -3.0
            "#},
        )
        .unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid configuration"));
        assert!(message.contains("2 errors occurred"));
    }

    #[test]
    fn explicit_path_missing_file_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = load_config_from_path(&root.path().join("absent.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
