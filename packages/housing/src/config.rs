//! TOML configuration for the classifier thresholds.
//!
//! ```toml
//! [thresholds]
//! low_rise_max = 5
//! mid_rise_max = 16
//! ```
//!
//! Both keys are optional and fall back to [`Thresholds::default`].

use std::path::Path;

use housing_report_models::Thresholds;
use serde::Deserialize;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has wrongly typed keys.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Thresholds must satisfy `0 < low_rise_max < mid_rise_max`.
    #[error(
        "Invalid thresholds: low_rise_max={low_rise_max}, mid_rise_max={mid_rise_max} \
         (expected 0 < low_rise_max < mid_rise_max)"
    )]
    InvalidThresholds {
        /// Configured low-rise limit.
        low_rise_max: i64,
        /// Configured mid-rise limit.
        mid_rise_max: i64,
    },
}

/// Top-level layout of a report config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Category boundaries.
    pub thresholds: Thresholds,
}

/// Parses a report config from a TOML string.
///
/// # Errors
///
/// Returns [`ConfigError::Toml`] if the string is not a valid config.
pub fn parse_config_toml(s: &str) -> Result<ReportConfig, ConfigError> {
    Ok(toml::from_str(s)?)
}

/// Reads the thresholds from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_thresholds(path: &Path) -> Result<Thresholds, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config_toml(&contents)?;
    log::debug!(
        "Loaded thresholds from {}: {:?}",
        path.display(),
        config.thresholds
    );
    Ok(config.thresholds)
}
