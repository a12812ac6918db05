#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Housing report: height classification and area-per-capita statistics.
//!
//! A batch of [`House`] records is loaded from CSV ([`loader`]), each
//! building is assigned a [`HeightCategory`] by a [`Classifier`], and the two
//! summary statistics are computed in a single pass ([`aggregate`]). The
//! [`report`] module turns the resulting [`HousingSummary`] into text or
//! JSON.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod loader;
pub mod report;

use std::path::Path;

pub use housing_report_models::{
    CategoryCounts, FloorValue, HeightCategory, House, HousingSummary, Thresholds,
};

pub use aggregate::{
    AggregateError, classify_all, count_by_category, min_area_per_capita, summarize,
};
pub use classify::{ClassifyError, Classifier, classify};
pub use config::ConfigError;
pub use loader::LoadError;
pub use report::ReportFormat;

/// Errors that can occur while producing a housing report.
#[derive(Debug, thiserror::Error)]
pub enum HousingError {
    /// Reading or parsing the input failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A record could not be aggregated.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// The configuration is unreadable or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads `input`, summarizes it and renders the report.
///
/// When `thresholds_path` is given the classifier thresholds are read from
/// that TOML file, otherwise the 5/16 defaults apply.
///
/// # Errors
///
/// Returns the first error from config loading, CSV parsing, aggregation or
/// rendering. No partial report is produced.
pub fn run_report(
    input: &Path,
    thresholds_path: Option<&Path>,
    format: ReportFormat,
) -> Result<String, HousingError> {
    let thresholds = match thresholds_path {
        Some(path) => config::load_thresholds(path)?,
        None => Thresholds::default(),
    };
    let classifier = Classifier::new(thresholds)?;

    let houses = loader::load_path(input)?;
    let summary = summarize(&classifier, &houses)?;

    Ok(report::render(&summary, format)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_bundled_fixture() {
        let csv = include_str!("../fixtures/housing_data.csv");
        let houses = loader::load_reader(csv.as_bytes()).unwrap();
        let summary = summarize(&Classifier::default(), &houses).unwrap();

        assert_eq!(summary.total_houses, 6);
        assert_eq!(summary.category_counts[&HeightCategory::LowRise], 3);
        assert_eq!(summary.category_counts[&HeightCategory::MidRise], 2);
        assert_eq!(summary.category_counts[&HeightCategory::HighRise], 1);
        assert_eq!(
            summary.min_area_per_capita_address.as_deref(),
            Some("пер. Школьный, 4")
        );
    }

    #[test]
    fn runs_report_from_fixture_path() {
        let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/housing_data.csv");
        let thresholds = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/thresholds.toml");

        let text = run_report(&input, Some(&thresholds), ReportFormat::Text).unwrap();
        assert!(text.contains("Малоэтажный: 3; Среднеэтажный: 2; Многоэтажный: 1."));
        assert!(text.ends_with("пер. Школьный, 4."));
    }

    #[test]
    fn zero_population_aborts_report() {
        let csv = "floor_count,population,area_residential,house_address\n3,0,50,Empty\n";
        let houses = loader::load_reader(csv.as_bytes()).unwrap();
        let err = HousingError::from(summarize(&Classifier::default(), &houses).unwrap_err());
        assert!(err.to_string().contains("population is zero"));
    }

    #[test]
    fn missing_input_is_load_error() {
        let err = run_report(
            Path::new("/nonexistent/housing_data.csv"),
            None,
            ReportFormat::Text,
        )
        .unwrap_err();
        assert!(matches!(err, HousingError::Load(LoadError::Io(_))));
    }
}
