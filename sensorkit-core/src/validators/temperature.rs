//! Temperature validator
//!
//! Accepts readings in °C within [-40, 150] by default, the operating band
//! of the line's industrial-grade sensors.

use crate::{
    config::RangeLimits,
    constants::{TEMPERATURE_MAX_C, TEMPERATURE_MIN_C},
    errors::{Field, ValidationResult},
    traits::{RangeValidator, Validator},
};

use super::utils;

/// Temperature validator for Celsius readings
#[derive(Debug, Clone)]
pub struct TemperatureValidator {
    limits: RangeLimits,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            limits: RangeLimits::new(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
        }
    }
}

impl TemperatureValidator {
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

impl Validator for TemperatureValidator {
    type Value = f64;

    fn validate(&self, value: &f64) -> ValidationResult<()> {
        utils::check_range(Field::Temperature, *value, self.limits)
    }

    fn field(&self) -> Field {
        Field::Temperature
    }
}

impl RangeValidator for TemperatureValidator {
    fn constraints(&self) -> RangeLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn valid_temperature() {
        let validator = TemperatureValidator::default();

        for value in [-40.0, -39.9, 0.0, 25.0, 149.9, 150.0] {
            assert!(validator.validate(&value).is_ok(), "{value} should pass");
        }
    }

    #[test]
    fn temperature_out_of_range() {
        let validator = TemperatureValidator::default();

        for value in [-40.1, -100.0, 150.1, 200.0, -999.0, 999.0] {
            let result = validator.validate(&value);
            assert!(
                matches!(result, Err(ValidationError::OutOfRange { field: Field::Temperature, .. })),
                "{value} should fail"
            );
        }
    }

    #[test]
    fn custom_limits_swap() {
        let validator = TemperatureValidator::new_with_limits(60.0, -10.0);
        assert_eq!(validator.constraints(), RangeLimits { min: -10.0, max: 60.0 });
        assert!(validator.validate(&-20.0).is_err());
        assert!(validator.validate(&21.0).is_ok());
    }
}
