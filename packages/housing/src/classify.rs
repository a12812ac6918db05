//! Floor count → height category classification.

use housing_report_models::{FloorValue, HeightCategory, Thresholds};

use crate::config::ConfigError;

/// Errors produced when a floor count cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// The floor count was not integer-typed (e.g. `3.5` or `5.0`).
    #[error("Floor count must be an integer, got {value}")]
    InvalidType {
        /// The rejected value.
        value: FloorValue,
    },

    /// The floor count was zero or negative.
    #[error("Floor count must be positive, got {value}")]
    InvalidValue {
        /// The rejected value.
        value: i64,
    },
}

/// Maps floor counts to [`HeightCategory`] using a fixed pair of thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    /// Creates a classifier with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThresholds`] unless
    /// `0 < low_rise_max < mid_rise_max`.
    pub fn new(thresholds: Thresholds) -> Result<Self, ConfigError> {
        if thresholds.low_rise_max <= 0 || thresholds.low_rise_max >= thresholds.mid_rise_max {
            return Err(ConfigError::InvalidThresholds {
                low_rise_max: thresholds.low_rise_max,
                mid_rise_max: thresholds.mid_rise_max,
            });
        }
        Ok(Self { thresholds })
    }

    /// Returns the thresholds this classifier was built with.
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Classifies a single floor count.
    ///
    /// Both upper bounds are inclusive: with the default thresholds, 5 is
    /// low-rise, 16 is mid-rise and 17 is high-rise.
    ///
    /// # Errors
    ///
    /// * [`ClassifyError::InvalidType`] if `floor_count` is not an integer
    /// * [`ClassifyError::InvalidValue`] if it is zero or negative
    pub fn classify(
        &self,
        floor_count: impl Into<FloorValue>,
    ) -> Result<HeightCategory, ClassifyError> {
        let value = match floor_count.into() {
            FloorValue::Integer(value) => value,
            real @ FloorValue::Real(_) => {
                return Err(ClassifyError::InvalidType { value: real });
            }
        };

        if value <= 0 {
            return Err(ClassifyError::InvalidValue { value });
        }

        Ok(if value <= self.thresholds.low_rise_max {
            HeightCategory::LowRise
        } else if value <= self.thresholds.mid_rise_max {
            HeightCategory::MidRise
        } else {
            HeightCategory::HighRise
        })
    }
}

/// Classifies a floor count with the default 5/16 thresholds.
///
/// # Errors
///
/// See [`Classifier::classify`].
pub fn classify(floor_count: impl Into<FloorValue>) -> Result<HeightCategory, ClassifyError> {
    Classifier::default().classify(floor_count)
}
