//! Record validation
//!
//! Runs every field validator over a [`SensorReading`] and collects all
//! violations instead of stopping at the first, so a rejected reading tells
//! the caller everything that is wrong with it in one pass.
//!
//! ```rust
//! use sensorkit_core::{validate_sensor_reading, Field, SensorReading};
//!
//! let reading = SensorReading::new("2024-01-15T10:30:00", "TI-A1B2-C3D4", 200.0, 500.0, 45.0);
//! let report = validate_sensor_reading(&reading);
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.fields(), vec![Field::Temperature]);
//! ```

use core::fmt;

use crate::{
    config::ValidationLimits,
    errors::{Field, ValidationError, ValidationResult},
    reading::SensorReading,
    traits::Validator,
    validators::{
        HumidityValidator, PressureValidator, SensorIdValidator, TemperatureValidator,
        TimestampValidator,
    },
};

/// Outcome of validating one reading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Violations in field order
    pub violations: Vec<ValidationError>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no violations)
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Record the outcome of one field check
    pub fn record(&mut self, outcome: ValidationResult<()>) {
        if let Err(violation) = outcome {
            self.violations.push(violation);
        }
    }

    /// Fields that failed, in record order
    pub fn fields(&self) -> Vec<Field> {
        self.violations.iter().map(ValidationError::field).collect()
    }

    /// Whether a particular field failed
    pub fn has_violation(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }

    /// Human-readable message per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// `Ok` when valid, otherwise the report itself as the error
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Validates whole readings against a set of limits
#[derive(Debug, Clone)]
pub struct ReadingValidator {
    timestamp: TimestampValidator,
    sensor_id: SensorIdValidator,
    temperature: TemperatureValidator,
    pressure: PressureValidator,
    humidity: HumidityValidator,
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self::new(ValidationLimits::default())
    }
}

impl ReadingValidator {
    /// Create a record validator using `limits` for the numeric fields
    pub fn new(limits: ValidationLimits) -> Self {
        Self {
            timestamp: TimestampValidator,
            sensor_id: SensorIdValidator,
            temperature: TemperatureValidator::from_limits(limits.temperature),
            pressure: PressureValidator::from_limits(limits.pressure),
            humidity: HumidityValidator::from_limits(limits.humidity),
        }
    }

    /// Check all five fields and collect every violation
    pub fn validate(&self, reading: &SensorReading) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.record(self.timestamp.validate(&reading.timestamp));
        report.record(self.sensor_id.validate(&reading.sensor_id));
        report.record(self.temperature.validate(&reading.temperature));
        report.record(self.pressure.validate(&reading.pressure));
        report.record(self.humidity.validate(&reading.humidity));

        if !report.is_valid() {
            log::debug!(
                "reading from {:?} rejected: {}",
                reading.sensor_id,
                report
            );
        }

        report
    }
}

/// Validate a reading against the default limits
pub fn validate_sensor_reading(reading: &SensorReading) -> ValidationReport {
    ReadingValidator::default().validate(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SensorReading {
        SensorReading::new("2024-01-15T10:30:00", "TI-A1B2-C3D4", 25.5, 500.0, 45.0)
    }

    #[test]
    fn valid_reading_has_no_violations() {
        let report = validate_sensor_reading(&valid());
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
        assert_eq!(report.to_string(), "valid");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn each_single_invalid_field_is_identified() {
        let cases: [(Field, fn(&mut SensorReading)); 5] = [
            (Field::Timestamp, |r| r.timestamp = "not-a-date".into()),
            (Field::SensorId, |r| r.sensor_id = "INVALID-ID".into()),
            (Field::Temperature, |r| r.temperature = 200.0),
            (Field::Pressure, |r| r.pressure = -1.0),
            (Field::Humidity, |r| r.humidity = 100.5),
        ];

        for (field, corrupt) in cases {
            let mut reading = valid();
            corrupt(&mut reading);
            let report = validate_sensor_reading(&reading);
            assert_eq!(report.fields(), vec![field], "corrupting {field}");
        }
    }

    #[test]
    fn all_fields_invalid_in_field_order() {
        let reading = SensorReading::new("never", "bad", -50.0, 1500.0, f64::NAN);
        let report = validate_sensor_reading(&reading);
        assert_eq!(report.fields(), Field::ALL.to_vec());
        assert_eq!(report.violations.len(), 5);
        assert!(report.messages()[4].contains("humidity"));
    }

    #[test]
    fn custom_limits() {
        let validator = ReadingValidator::new(ValidationLimits::clean_room());
        let report = validator.validate(&valid());
        assert!(report.has_violation(Field::Pressure));
        assert!(!report.has_violation(Field::Temperature));
    }

    #[test]
    fn report_into_error() {
        let mut reading = valid();
        reading.sensor_id = "TI-AB12".into();
        let err = validate_sensor_reading(&reading).into_result().unwrap_err();
        assert!(err.to_string().contains("TI-AB12"));
    }
}
