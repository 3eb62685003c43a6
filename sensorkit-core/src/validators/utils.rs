//! Shared range checking used by the numeric validators
//!
//! NaN and infinite values are rejected as `InvalidValue` before any range
//! comparison.

use crate::{
    config::RangeLimits,
    errors::{Field, ValidationError, ValidationResult},
    traits::Validatable,
};

/// Check that `value` is a finite number inside `limits` (inclusive)
pub fn check_range(field: Field, value: f64, limits: RangeLimits) -> ValidationResult<()> {
    if !value.is_valid() {
        return Err(ValidationError::InvalidValue { field });
    }

    if limits.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: limits.min,
            max: limits.max,
        })
    }
}
