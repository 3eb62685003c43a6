//! Validation limits
//!
//! The numeric range checks, the clamping cleaner and the record validator
//! all read their bounds from a [`ValidationLimits`]. The defaults come from
//! [`crate::constants`]; a deployment can load its own from JSON:
//!
//! ```rust
//! use sensorkit_core::config::ValidationLimits;
//!
//! let limits = ValidationLimits::from_json_str(r#"{
//!     "temperature": { "min": -10.0, "max": 60.0 },
//!     "pressure":    { "min": 0.0,   "max": 1000.0 },
//!     "humidity":    { "min": 0.0,   "max": 100.0 }
//! }"#)?;
//! assert_eq!(limits.temperature.max, 60.0);
//! # Ok::<(), sensorkit_core::ConfigError>(())
//! ```

use crate::{
    constants::{
        HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, PRESSURE_MAX_HPA, PRESSURE_MIN_HPA,
        TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
    },
    errors::{ConfigError, Field},
};

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeLimits {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
}

impl RangeLimits {
    /// Create a range, swapping reversed bounds
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self { min, max }
    }

    /// Whether `value` lies inside the range (NaN never does)
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Pull `value` into the range; NaN passes through unchanged
    pub fn clamp(&self, value: f64) -> f64 {
        // f64::max returns the other operand for NaN
        if value.is_nan() {
            value
        } else {
            value.max(self.min).min(self.max)
        }
    }

    fn check(&self, field: Field) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite { field });
        }
        if self.min > self.max {
            return Err(ConfigError::Reversed {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Bounds for the three numeric fields
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationLimits {
    /// Temperature range in °C
    pub temperature: RangeLimits,
    /// Pressure range in hPa
    pub pressure: RangeLimits,
    /// Relative humidity range in %
    pub humidity: RangeLimits,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            temperature: RangeLimits::new(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            pressure: RangeLimits::new(PRESSURE_MIN_HPA, PRESSURE_MAX_HPA),
            humidity: RangeLimits::new(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
        }
    }
}

impl ValidationLimits {
    /// Clean-room line: tight climate control
    pub fn clean_room() -> Self {
        Self {
            temperature: RangeLimits::new(15.0, 30.0),
            pressure: RangeLimits::new(950.0, 1000.0),
            humidity: RangeLimits::new(30.0, 60.0),
        }
    }

    /// Range for a numeric field; `None` for timestamp and sensor_id
    pub fn for_field(&self, field: Field) -> Option<RangeLimits> {
        match field {
            Field::Temperature => Some(self.temperature),
            Field::Pressure => Some(self.pressure),
            Field::Humidity => Some(self.humidity),
            Field::Timestamp | Field::SensorId => None,
        }
    }

    /// Reject reversed or non-finite bounds
    pub fn check(&self) -> Result<(), ConfigError> {
        self.temperature.check(Field::Temperature)?;
        self.pressure.check(Field::Pressure)?;
        self.humidity.check(Field::Humidity)?;
        Ok(())
    }

    /// Decode limits from a JSON document and check them
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let limits: Self = serde_json::from_str(json)?;
        limits.check()?;
        log::debug!("loaded validation limits: {:?}", limits);
        Ok(limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let limits = ValidationLimits::default();
        assert_eq!(limits.temperature, RangeLimits { min: -40.0, max: 150.0 });
        assert_eq!(limits.pressure, RangeLimits { min: 0.0, max: 1000.0 });
        assert_eq!(limits.humidity, RangeLimits { min: 0.0, max: 100.0 });
        assert!(limits.check().is_ok());
    }

    #[test]
    fn reversed_bounds_swap() {
        let range = RangeLimits::new(10.0, -10.0);
        assert_eq!(range.min, -10.0);
        assert_eq!(range.max, 10.0);
    }

    #[test]
    fn clamp_keeps_nan() {
        let range = RangeLimits::new(0.0, 100.0);
        assert_eq!(range.clamp(150.0), 100.0);
        assert_eq!(range.clamp(-5.0), 0.0);
        assert!(range.clamp(f64::NAN).is_nan());
    }

    #[test]
    fn field_lookup() {
        let limits = ValidationLimits::default();
        assert_eq!(limits.for_field(Field::Humidity), Some(limits.humidity));
        assert_eq!(limits.for_field(Field::SensorId), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_reversed_range() {
        let json = r#"{
            "temperature": { "min": 50.0, "max": -50.0 },
            "pressure": { "min": 0.0, "max": 1000.0 },
            "humidity": { "min": 0.0, "max": 100.0 }
        }"#;
        let err = ValidationLimits::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Reversed { field: Field::Temperature, .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_garbage() {
        assert!(matches!(
            ValidationLimits::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
