//! Single-pass reductions over a batch of [`House`] records.
//!
//! Every function here takes its input by reference and returns a fresh
//! result. The first invalid record aborts the whole computation; there is
//! no partial-result mode.

use housing_report_models::{CategoryCounts, HeightCategory, House, HousingSummary};

use crate::classify::{ClassifyError, Classifier};

/// Errors that abort an aggregation pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// A record's floor count could not be classified.
    #[error("Cannot classify house #{index} ({address}): {source}")]
    Classify {
        /// Zero-based position of the record in the input.
        index: usize,
        /// Address of the offending record.
        address: String,
        /// Underlying classification failure.
        #[source]
        source: ClassifyError,
    },

    /// A record has no occupants, so its area per capita is undefined.
    #[error("Cannot compute area per capita for house #{index} ({address}): population is zero")]
    DivisionByZero {
        /// Zero-based position of the record in the input.
        index: usize,
        /// Address of the offending record.
        address: String,
    },
}

/// Classifies every house, preserving input order.
///
/// # Errors
///
/// Returns [`AggregateError::Classify`] for the first record whose floor
/// count is rejected by `classifier`.
pub fn classify_all(
    classifier: &Classifier,
    houses: &[House],
) -> Result<Vec<HeightCategory>, AggregateError> {
    houses
        .iter()
        .enumerate()
        .map(|(index, house)| {
            classifier
                .classify(house.floor_count)
                .map_err(|source| AggregateError::Classify {
                    index,
                    address: house.house_address.clone(),
                    source,
                })
        })
        .collect()
}

/// Tallies how many times each category occurs.
///
/// Pass the full category sequence, not a deduplicated set: every
/// occurrence is counted. Categories that never occur are absent from the
/// result.
#[must_use]
pub fn count_by_category(categories: impl IntoIterator<Item = HeightCategory>) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}

/// Residential area per occupant of a single house.
///
/// # Errors
///
/// Returns [`AggregateError::DivisionByZero`] if the population is zero.
#[allow(clippy::cast_precision_loss)]
fn area_per_capita(index: usize, house: &House) -> Result<f64, AggregateError> {
    if house.population == 0 {
        return Err(AggregateError::DivisionByZero {
            index,
            address: house.house_address.clone(),
        });
    }
    Ok(house.area_residential / house.population as f64)
}

/// Finds the address of the house with the lowest residential area per
/// occupant.
///
/// Ties keep the earliest record. Returns `Ok(None)` for an empty slice, or
/// when no ratio is finite.
///
/// # Errors
///
/// Returns [`AggregateError::DivisionByZero`] for the first record with a
/// population of zero.
pub fn min_area_per_capita(houses: &[House]) -> Result<Option<String>, AggregateError> {
    let mut min_ratio = f64::INFINITY;
    let mut best: Option<&House> = None;

    for (index, house) in houses.iter().enumerate() {
        let ratio = area_per_capita(index, house)?;
        log::trace!("{}: {ratio:.3} per occupant", house.house_address);

        if ratio < min_ratio {
            min_ratio = ratio;
            best = Some(house);
        }
    }

    Ok(best.map(|house| house.house_address.clone()))
}

/// Runs the full report computation over one batch.
///
/// # Errors
///
/// Propagates the first [`AggregateError`] from classification or the
/// area-per-capita scan.
pub fn summarize(
    classifier: &Classifier,
    houses: &[House],
) -> Result<HousingSummary, AggregateError> {
    let categories = classify_all(classifier, houses)?;
    let category_counts = count_by_category(categories);
    let min_area_per_capita_address = min_area_per_capita(houses)?;

    log::info!(
        "Summarized {} house(s) across {} height category(ies)",
        houses.len(),
        category_counts.len()
    );

    Ok(HousingSummary {
        total_houses: houses.len() as u64,
        category_counts,
        min_area_per_capita_address,
    })
}
