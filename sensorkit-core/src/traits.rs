//! Core traits for validators
//!
//! These traits define the interface all field validators implement.
//! Keep them simple - a validator checks one field and nothing else.

use crate::{
    config::RangeLimits,
    errors::{Field, ValidationResult},
};

/// Core validator trait - implement this for each field
pub trait Validator {
    /// The type of value this validator handles
    type Value: ?Sized;

    /// Validate a single field value
    fn validate(&self, value: &Self::Value) -> ValidationResult<()>;

    /// Field this validator is responsible for
    fn field(&self) -> Field;
}

/// Validators backed by an inclusive numeric range
pub trait RangeValidator: Validator<Value = f64> {
    /// The accepted range
    fn constraints(&self) -> RangeLimits;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
