//! Humidity validator
//!
//! Relative humidity is a percentage by definition, so the default range is
//! the full [0, 100]. Unlike outdoor capacitive sensors, the line sensors
//! are calibrated to clip at the ends; readings beyond them are faults,
//! not supersaturation.

use crate::{
    config::RangeLimits,
    constants::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
    errors::{Field, ValidationResult},
    traits::{RangeValidator, Validator},
};

use super::utils;

/// Humidity validator for relative humidity percentage
#[derive(Debug, Clone)]
pub struct HumidityValidator {
    limits: RangeLimits,
}

impl Default for HumidityValidator {
    fn default() -> Self {
        Self {
            limits: RangeLimits::new(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
        }
    }
}

impl HumidityValidator {
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

impl Validator for HumidityValidator {
    type Value = f64;

    fn validate(&self, value: &f64) -> ValidationResult<()> {
        utils::check_range(Field::Humidity, *value, self.limits)
    }

    fn field(&self) -> Field {
        Field::Humidity
    }
}

impl RangeValidator for HumidityValidator {
    fn constraints(&self) -> RangeLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_humidity() {
        let validator = HumidityValidator::default();

        // Normal indoor humidity
        assert!(validator.validate(&45.0).is_ok());

        // Both ends are inclusive
        assert!(validator.validate(&0.0).is_ok());
        assert!(validator.validate(&100.0).is_ok());
    }

    #[test]
    fn humidity_out_of_range() {
        let validator = HumidityValidator::default();

        assert!(validator.validate(&-0.1).is_err());
        assert!(validator.validate(&100.1).is_err());
        assert!(validator.validate(&150.0).is_err());
    }

    #[test]
    fn museum_limits() {
        let validator = HumidityValidator::new_with_limits(40.0, 60.0);
        assert!(validator.validate(&35.0).is_err());
        assert!(validator.validate(&55.0).is_ok());
    }
}
