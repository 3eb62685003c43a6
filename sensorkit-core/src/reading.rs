//! Sensor reading records
//!
//! [`SensorReading`] is the record as it arrives: the timestamp is still
//! text and nothing has been checked. It is a transient value object:
//! created by a caller, validated, then accepted or rejected.
//!
//! [`Measurement`] is the same record with its timestamp parsed, which is
//! what cleaning and analysis work on. A NaN value in a measurement marks a
//! missing sample (see gap filling in the analysis crate).

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::{
    errors::{Field, ParseError, ValidationError},
    validators::parse_timestamp,
};

/// A parsed CSV row: column name to cell text
pub type Row = HashMap<String, String>;

/// One reading from a production-line sensor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// ISO 8601 acquisition time
    pub timestamp: String,
    /// Identifier in `TI-XXXX-YYYY` form
    pub sensor_id: String,
    /// Temperature in °C
    pub temperature: f64,
    /// Pressure in hPa
    pub pressure: f64,
    /// Relative humidity in %
    pub humidity: f64,
}

impl SensorReading {
    /// Create a reading from its five fields
    pub fn new(
        timestamp: impl Into<String>,
        sensor_id: impl Into<String>,
        temperature: f64,
        pressure: f64,
        humidity: f64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sensor_id: sensor_id.into(),
            temperature,
            pressure,
            humidity,
        }
    }

    /// Build a reading from string cells keyed by column name
    ///
    /// Only presence and number syntax are checked here; constraint checks
    /// belong to the record validator.
    pub fn from_row(row: &Row) -> Result<Self, ParseError> {
        let cell = |field: Field| {
            row.get(field.name())
                .map(String::as_str)
                .ok_or(ParseError::MissingField(field))
        };
        let number = |field: Field| -> Result<f64, ParseError> {
            let text = cell(field)?;
            text.trim().parse().map_err(|_| ParseError::InvalidNumber {
                field,
                value: text.to_owned(),
            })
        };

        Ok(Self {
            timestamp: cell(Field::Timestamp)?.to_owned(),
            sensor_id: cell(Field::SensorId)?.to_owned(),
            temperature: number(Field::Temperature)?,
            pressure: number(Field::Pressure)?,
            humidity: number(Field::Humidity)?,
        })
    }

    /// Numeric value of a measurement field; `None` for text fields
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => Some(self.temperature),
            Field::Pressure => Some(self.pressure),
            Field::Humidity => Some(self.humidity),
            Field::Timestamp | Field::SensorId => None,
        }
    }
}

/// A reading with a parsed timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Acquisition time (UTC when the source carried an offset)
    pub timestamp: NaiveDateTime,
    /// Identifier in `TI-XXXX-YYYY` form
    pub sensor_id: String,
    /// Temperature in °C, NaN when missing
    pub temperature: f64,
    /// Pressure in hPa, NaN when missing
    pub pressure: f64,
    /// Relative humidity in %, NaN when missing
    pub humidity: f64,
}

impl Measurement {
    /// Create a measurement from its five fields
    pub fn new(
        timestamp: NaiveDateTime,
        sensor_id: impl Into<String>,
        temperature: f64,
        pressure: f64,
        humidity: f64,
    ) -> Self {
        Self {
            timestamp,
            sensor_id: sensor_id.into(),
            temperature,
            pressure,
            humidity,
        }
    }

    /// Gap marker: all values missing
    pub fn placeholder(timestamp: NaiveDateTime, sensor_id: impl Into<String>) -> Self {
        Self::new(timestamp, sensor_id, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Whether every value is missing
    pub fn is_placeholder(&self) -> bool {
        self.temperature.is_nan() && self.pressure.is_nan() && self.humidity.is_nan()
    }

    /// Numeric value of a measurement field; `None` for text fields
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => Some(self.temperature),
            Field::Pressure => Some(self.pressure),
            Field::Humidity => Some(self.humidity),
            Field::Timestamp | Field::SensorId => None,
        }
    }
}

impl TryFrom<&SensorReading> for Measurement {
    type Error = ValidationError;

    fn try_from(reading: &SensorReading) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: parse_timestamp(&reading.timestamp)?,
            sensor_id: reading.sensor_id.clone(),
            temperature: reading.temperature,
            pressure: reading.pressure,
            humidity: reading.humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_row() -> Row {
        row(&[
            ("timestamp", "2024-01-15T10:30:00"),
            ("sensor_id", "TI-A1B2-C3D4"),
            ("temperature", "25.5"),
            ("pressure", " 500.0 "),
            ("humidity", "45"),
        ])
    }

    #[test]
    fn parses_complete_row() {
        let reading = SensorReading::from_row(&full_row()).unwrap();
        assert_eq!(
            reading,
            SensorReading::new("2024-01-15T10:30:00", "TI-A1B2-C3D4", 25.5, 500.0, 45.0)
        );
    }

    #[test]
    fn missing_column() {
        let mut cells = full_row();
        cells.remove("humidity");
        assert_eq!(
            SensorReading::from_row(&cells),
            Err(ParseError::MissingField(Field::Humidity))
        );
    }

    #[test]
    fn bad_number() {
        let mut cells = full_row();
        cells.insert("temperature".into(), "warm".into());
        assert!(matches!(
            SensorReading::from_row(&cells),
            Err(ParseError::InvalidNumber { field: Field::Temperature, .. })
        ));
    }

    #[test]
    fn measurement_from_reading() {
        let reading = SensorReading::new("2024-01-15T10:30:00Z", "TI-A1B2-C3D4", 25.5, 500.0, 45.0);
        let measurement = Measurement::try_from(&reading).unwrap();
        assert_eq!(measurement.sensor_id, "TI-A1B2-C3D4");
        assert_eq!(measurement.value(Field::Pressure), Some(500.0));
        assert!(!measurement.is_placeholder());

        let bad = SensorReading::new("yesterday", "TI-A1B2-C3D4", 25.5, 500.0, 45.0);
        assert!(Measurement::try_from(&bad).is_err());
    }

    #[test]
    fn placeholder_has_no_values() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let gap = Measurement::placeholder(ts, "TI-A1B2-C3D4");
        assert!(gap.is_placeholder());
        assert!(gap.value(Field::Temperature).unwrap().is_nan());
    }
}
