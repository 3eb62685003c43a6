//! Core validation engine for SensorKit
//!
//! Checks production-line sensor readings against fixed field
//! constraints: ISO 8601 timestamps, `TI-XXXX-YYYY` identifiers and
//! inclusive ranges for temperature, pressure and humidity.
//!
//! Every validator is a pure, synchronous function. Violations are
//! ordinary values naming the field and the broken constraint; nothing
//! here panics on bad input.
//!
//! ```
//! use sensorkit_core::{validate_sensor_reading, validate_temperature, SensorReading};
//!
//! assert!(validate_temperature(25.0).is_ok());
//!
//! let reading = SensorReading::new("2024-01-15T10:30:00", "TI-A1B2-C3D4", 25.5, 500.0, 45.0);
//! assert!(validate_sensor_reading(&reading).is_valid());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod reading;
pub mod record;
pub mod traits;
pub mod validators;

// Public API
pub use batch::{validate_batch, validate_rows, BatchSummary, RowErrors};
pub use config::{RangeLimits, ValidationLimits};
pub use errors::{ConfigError, Field, IngestError, ParseError, ValidationError, ValidationResult};
pub use ingest::{read_csv_rows, validate_csv_file};
pub use reading::{Measurement, Row, SensorReading};
pub use record::{validate_sensor_reading, ReadingValidator, ValidationReport};
pub use traits::{RangeValidator, Validatable, Validator};
pub use validators::{
    parse_timestamp, validate_humidity, validate_pressure, validate_sensor_id,
    validate_temperature, validate_timestamp, HumidityValidator, PressureValidator,
    SensorIdValidator, TemperatureValidator, TimestampValidator,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
