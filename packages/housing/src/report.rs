//! Rendering of a [`HousingSummary`] for humans or machines.

use housing_report_models::HousingSummary;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// The plain-text report in the existing house-report layout.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole summary.
    Json,
}

const CATEGORIES_HEADING: &str = "Категории домов и их количество в каждой:";
const MIN_AREA_HEADING: &str = "Дом с наименьшим средним количеством жилплощади на жильца:";

/// Renders the plain-text report.
///
/// Categories are listed lowest first as `label: count` pairs joined by
/// `"; "`. An empty batch produces an empty category list and address.
#[must_use]
pub fn render_text(summary: &HousingSummary) -> String {
    let counts = summary
        .category_counts
        .iter()
        .map(|(category, count)| format!("{category}: {count}"))
        .collect::<Vec<_>>()
        .join("; ");
    let address = summary.min_area_per_capita_address.as_deref().unwrap_or("");

    format!("{CATEGORIES_HEADING}\n {counts}.\n{MIN_AREA_HEADING} {address}.")
}

/// Renders the summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(summary: &HousingSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

/// Renders the summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(summary: &HousingSummary, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(summary)),
        ReportFormat::Json => render_json(summary),
    }
}
