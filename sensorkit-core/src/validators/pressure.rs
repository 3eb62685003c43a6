//! Pressure validator
//!
//! Process-line pressure in hPa. Zero is a legitimate reading (vented or
//! evacuated chamber), so the default range is [0, 1000].

use crate::{
    config::RangeLimits,
    constants::{PRESSURE_MAX_HPA, PRESSURE_MIN_HPA},
    errors::{Field, ValidationResult},
    traits::{RangeValidator, Validator},
};

use super::utils;

/// Pressure validator for readings in hPa (hectopascals)
#[derive(Debug, Clone)]
pub struct PressureValidator {
    limits: RangeLimits,
}

impl Default for PressureValidator {
    fn default() -> Self {
        Self {
            limits: RangeLimits::new(PRESSURE_MIN_HPA, PRESSURE_MAX_HPA),
        }
    }
}

impl PressureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        Self {
            limits: RangeLimits::new(min, max),
        }
    }

    /// Create validator from a configured range
    pub fn from_limits(limits: RangeLimits) -> Self {
        Self { limits }
    }
}

impl Validator for PressureValidator {
    type Value = f64;

    fn validate(&self, value: &f64) -> ValidationResult<()> {
        utils::check_range(Field::Pressure, *value, self.limits)
    }

    fn field(&self) -> Field {
        Field::Pressure
    }
}

impl RangeValidator for PressureValidator {
    fn constraints(&self) -> RangeLimits {
        self.limits
    }
}
