//! Sensor identifier validator
//!
//! Identifiers look like `TI-A1B2-C3D4`: the `TI` prefix, then two
//! four-character segments of uppercase ASCII letters or digits, separated
//! by `-`.

use crate::{
    constants::{SENSOR_ID_LEN, SENSOR_ID_PREFIX, SENSOR_ID_SEGMENT_LEN, SENSOR_ID_SEPARATOR},
    errors::{Field, ValidationError, ValidationResult},
    traits::Validator,
};

/// Validator for `TI-XXXX-YYYY` identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorIdValidator;

impl SensorIdValidator {
    /// Whether `value` follows the identifier layout
    pub fn matches(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() != SENSOR_ID_LEN {
            return false;
        }

        let (prefix, rest) = bytes.split_at(SENSOR_ID_PREFIX.len());
        if prefix != SENSOR_ID_PREFIX.as_bytes() {
            return false;
        }

        rest.chunks(SENSOR_ID_SEGMENT_LEN + 1).all(|segment| {
            segment[0] == SENSOR_ID_SEPARATOR
                && segment[1..]
                    .iter()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        })
    }
}

impl Validator for SensorIdValidator {
    type Value = str;

    fn validate(&self, value: &str) -> ValidationResult<()> {
        if Self::matches(value) {
            Ok(())
        } else {
            Err(ValidationError::MalformedSensorId {
                value: value.to_owned(),
            })
        }
    }

    fn field(&self) -> Field {
        Field::SensorId
    }
}
