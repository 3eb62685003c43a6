//! Shared fixtures for integration tests

#![allow(dead_code)]

use sensorkit_core::{Row, SensorReading};

/// Timestamp used by every fixture
pub const SAMPLE_TIMESTAMP: &str = "2024-01-15T10:30:00";

/// Column order used when writing CSV fixtures
pub const HEADERS: [&str; 5] = ["timestamp", "sensor_id", "temperature", "pressure", "humidity"];

/// A reading that passes every check
pub fn valid_sensor_reading() -> SensorReading {
    SensorReading::new(SAMPLE_TIMESTAMP, "TI-A1B2-C3D4", 25.5, 500.0, 45.0)
}

/// A reading whose only problem is its temperature
pub fn invalid_temperature_reading() -> SensorReading {
    SensorReading {
        temperature: 200.0,
        ..valid_sensor_reading()
    }
}

/// A reading whose only problem is its identifier
pub fn invalid_sensor_id_reading() -> SensorReading {
    SensorReading {
        sensor_id: "INVALID-ID".into(),
        ..valid_sensor_reading()
    }
}

/// Build a row from cells in [`HEADERS`] order
pub fn row(cells: [&str; 5]) -> Row {
    HEADERS
        .iter()
        .zip(cells)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Render rows as CSV text with a header line
pub fn to_csv(rows: &[[&str; 5]]) -> String {
    let mut lines = vec![HEADERS.join(",")];
    lines.extend(rows.iter().map(|cells| cells.join(",")));
    lines.join("\n")
}
