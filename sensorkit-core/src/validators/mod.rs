//! Field Validators
//!
//! ## Overview
//!
//! One validator per field of a sensor reading. Each checks a single
//! constraint and reports a violation that names the field:
//!
//! | Field | Constraint |
//! |---|---|
//! | timestamp | ISO 8601 datetime |
//! | sensor_id | `TI-XXXX-YYYY`, uppercase letters or digits |
//! | temperature | -40 ≤ t ≤ 150 °C |
//! | pressure | 0 ≤ p ≤ 1000 hPa |
//! | humidity | 0 ≤ h ≤ 100 % |
//!
//! All ranges are inclusive. NaN and infinities are rejected before any
//! range comparison.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorkit_core::validators::{validate_sensor_id, validate_temperature};
//!
//! validate_temperature(25.0)?;
//! validate_sensor_id("TI-AB12-XY99")?;
//! assert!(validate_temperature(150.5).is_err());
//! # Ok::<(), sensorkit_core::ValidationError>(())
//! ```
//!
//! ## Customization
//!
//! The validator types carry their own limits:
//!
//! ```rust
//! use sensorkit_core::validators::TemperatureValidator;
//! use sensorkit_core::Validator;
//!
//! // Cold-storage line
//! let cold = TemperatureValidator::new_with_limits(-30.0, 5.0);
//! assert!(cold.validate(&10.0).is_err());
//! ```

mod humidity;
mod pressure;
mod sensor_id;
mod temperature;
mod timestamp;
mod utils;

pub use humidity::HumidityValidator;
pub use pressure::PressureValidator;
pub use sensor_id::SensorIdValidator;
pub use temperature::TemperatureValidator;
pub use timestamp::{parse_timestamp, TimestampValidator};

use crate::{errors::ValidationResult, traits::Validator};

/// Valid iff `value` parses as an ISO 8601 datetime
pub fn validate_timestamp(value: &str) -> ValidationResult<()> {
    TimestampValidator.validate(value)
}

/// Valid iff `value` matches `TI-XXXX-YYYY`
pub fn validate_sensor_id(value: &str) -> ValidationResult<()> {
    SensorIdValidator.validate(value)
}

/// Valid iff -40 ≤ `value` ≤ 150
pub fn validate_temperature(value: f64) -> ValidationResult<()> {
    TemperatureValidator::default().validate(&value)
}

/// Valid iff 0 ≤ `value` ≤ 1000
pub fn validate_pressure(value: f64) -> ValidationResult<()> {
    PressureValidator::default().validate(&value)
}

/// Valid iff 0 ≤ `value` ≤ 100
pub fn validate_humidity(value: f64) -> ValidationResult<()> {
    HumidityValidator::default().validate(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert!(validate_temperature(-40.0).is_ok());
        assert!(validate_temperature(150.0).is_ok());
        assert!(validate_pressure(0.0).is_ok());
        assert!(validate_pressure(1000.0).is_ok());
        assert!(validate_humidity(0.0).is_ok());
        assert!(validate_humidity(100.0).is_ok());
    }

    #[test]
    fn documented_examples() {
        assert!(validate_sensor_id("TI-AB12-XY99").is_ok());
        assert!(validate_sensor_id("TI-AB12").is_err());
        assert!(validate_timestamp("2024-01-01T00:00:00Z").is_ok());
        assert!(validate_timestamp("not-a-date").is_err());
    }
}
