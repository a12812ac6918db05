#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building record and height category types.
//!
//! These are the shapes exchanged between the CSV loader, the aggregation
//! functions and the report renderer. Nothing in this crate performs I/O.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Height class of a building, determined solely by its floor count.
///
/// Variants are ordered from lowest to highest so that a [`CategoryCounts`]
/// map always iterates low-rise first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum HeightCategory {
    /// Up to [`Thresholds::low_rise_max`] floors.
    #[strum(serialize = "Малоэтажный")]
    LowRise,
    /// Above the low-rise limit, up to [`Thresholds::mid_rise_max`] floors.
    #[strum(serialize = "Среднеэтажный")]
    MidRise,
    /// Everything taller than the mid-rise limit.
    #[strum(serialize = "Многоэтажный")]
    HighRise,
}

impl HeightCategory {
    /// Returns all variants of this enum, lowest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::LowRise, Self::MidRise, Self::HighRise]
    }
}

/// A floor count as it appeared in the source data.
///
/// Keeps integer-typed values apart from real-typed ones, so `5.0` can be
/// rejected even though it is integer-valued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FloorValue {
    /// An integer literal, e.g. `9`.
    Integer(i64),
    /// A real number literal, e.g. `9.0` or `3.5`.
    Real(f64),
}

impl FloorValue {
    /// Parses raw text into a tagged floor value.
    ///
    /// Returns `None` if the text is neither an integer nor a real number.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Some(Self::Integer(value));
        }
        s.parse::<f64>().ok().map(Self::Real)
    }
}

impl From<i64> for FloorValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FloorValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for FloorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value:?}"),
        }
    }
}

/// One residential building as loaded from the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// Number of floors.
    pub floor_count: FloorValue,
    /// Number of occupants.
    pub population: i64,
    /// Total residential floor area.
    pub area_residential: f64,
    /// Street address. Not guaranteed unique.
    pub house_address: String,
    /// Every other column of the row, kept verbatim.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

/// Inclusive upper bounds of the low-rise and mid-rise categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Thresholds {
    /// Highest floor count still classified as low-rise.
    pub low_rise_max: i64,
    /// Highest floor count still classified as mid-rise.
    pub mid_rise_max: i64,
}

impl Thresholds {
    /// Default low-rise limit (5 floors).
    pub const LOW_RISE_MAX: i64 = 5;
    /// Default mid-rise limit (16 floors).
    pub const MID_RISE_MAX: i64 = 16;
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_rise_max: Self::LOW_RISE_MAX,
            mid_rise_max: Self::MID_RISE_MAX,
        }
    }
}

/// Number of buildings per height category. Unseen categories are absent.
pub type CategoryCounts = BTreeMap<HeightCategory, u64>;

/// Everything the report renderer needs from one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingSummary {
    /// Total number of buildings processed.
    pub total_houses: u64,
    /// Buildings per height category.
    pub category_counts: CategoryCounts,
    /// Address with the lowest residential area per occupant, if any
    /// buildings were supplied.
    pub min_area_per_capita_address: Option<String>,
}
