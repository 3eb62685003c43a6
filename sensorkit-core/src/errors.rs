//! Error Types for Sensor Reading Validation
//!
//! ## Error Categories
//!
//! ### Constraint Violations
//! - `OutOfRange`: numeric value outside its inclusive range (e.g. 200°C)
//! - `InvalidValue`: not a usable number (NaN, infinity)
//! - `MalformedSensorId`: identifier does not follow `TI-XXXX-YYYY`
//! - `MalformedTimestamp`: text is not an ISO 8601 datetime
//!
//! Every violation names the offending field, so a record validator can
//! collect them and tell the caller exactly what was wrong.
//!
//! ### Input Handling
//! - `ParseError`: a string row could not be turned into a reading
//! - `IngestError`: a CSV source could not be read
//! - `ConfigError`: validation limits are unusable
//!
//! None of these are fatal. They are the expected outcome of bad input.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sensorkit_core::{validate_temperature, Field, ValidationError};
//!
//! match validate_temperature(212.0) {
//!     Ok(()) => {
//!         // accept the reading
//!     }
//!     Err(ValidationError::OutOfRange { field, min, max, .. }) => {
//!         assert_eq!(field, Field::Temperature);
//!         assert_eq!((min, max), (-40.0, 150.0));
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The five fields of a sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// ISO 8601 acquisition time
    Timestamp,
    /// `TI-XXXX-YYYY` identifier
    SensorId,
    /// Temperature in °C
    Temperature,
    /// Pressure in hPa
    Pressure,
    /// Relative humidity in %
    Humidity,
}

impl Field {
    /// All fields in record order
    pub const ALL: [Field; 5] = [
        Field::Timestamp,
        Field::SensorId,
        Field::Temperature,
        Field::Pressure,
        Field::Humidity,
    ];

    /// Column / attribute name of the field
    pub const fn name(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::SensorId => "sensor_id",
            Field::Temperature => "temperature",
            Field::Pressure => "pressure",
            Field::Humidity => "humidity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constraint violation for a single field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value outside its inclusive range
    #[error("{field} {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Field that failed
        field: Field,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// NaN or infinite value
    #[error("{field} is not a valid number")]
    InvalidValue {
        /// Field that failed
        field: Field,
    },

    /// Identifier does not follow the `TI-XXXX-YYYY` pattern
    #[error("Invalid sensor_id '{value}': must match TI-XXXX-YYYY pattern")]
    MalformedSensorId {
        /// The rejected identifier
        value: String,
    },

    /// Not an ISO 8601 datetime
    #[error("Invalid timestamp '{value}': must be an ISO 8601 datetime")]
    MalformedTimestamp {
        /// The rejected text
        value: String,
    },
}

impl ValidationError {
    /// Field the violation belongs to
    pub fn field(&self) -> Field {
        match self {
            Self::OutOfRange { field, .. } | Self::InvalidValue { field } => *field,
            Self::MalformedSensorId { .. } => Field::SensorId,
            Self::MalformedTimestamp { .. } => Field::Timestamp,
        }
    }
}

/// Failure to build a reading from a string row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Column not present in the row
    #[error("missing field '{0}'")]
    MissingField(Field),

    /// Column present but not a float
    #[error("could not convert {field} to float: '{value}'")]
    InvalidNumber {
        /// Numeric column that failed
        field: Field,
        /// Raw cell text
        value: String,
    },
}

/// Failure to read a CSV source
#[derive(Error, Debug)]
pub enum IngestError {
    /// Underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Quoted cell still open at end of input
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// 1-based line where the record starts
        line: usize,
    },
}

/// Unusable validation limits
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Lower bound above upper bound
    #[error("{field} limits reversed: min {min} > max {max}")]
    Reversed {
        /// Field whose range is wrong
        field: Field,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// NaN or infinite bound
    #[error("{field} limits must be finite")]
    NonFinite {
        /// Field whose range is wrong
        field: Field,
    },

    /// Limits document could not be decoded
    #[cfg(feature = "serde")]
    #[error("invalid limits document: {0}")]
    Json(#[from] serde_json::Error),
}
