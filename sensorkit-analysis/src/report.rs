//! Structured analysis report
//!
//! Bundles statistics and anomalies into a serialisable document:
//!
//! ```json
//! {
//!   "generated_at": "2024-01-01T13:00:00",
//!   "summary": {
//!     "total_readings": 3,
//!     "sensor_count": 1,
//!     "time_range": { "start": "2024-01-01T12:00:00", "end": "2024-01-01T12:02:00" }
//!   },
//!   "sensors": {
//!     "TI-A1B2-C3D4": {
//!       "reading_count": 3,
//!       "temperature": { "mean": 25.0, "median": 25.0, "std": 0.82, "min": 24.0, "max": 26.0 },
//!       "pressure": { ... },
//!       "humidity": { ... }
//!     }
//!   },
//!   "anomalies": []
//! }
//! ```
//!
//! Statistics are rounded to two decimals and undefined values become
//! `null`. Timestamps have no offset.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use sensorkit_core::{Field, Measurement};

use crate::{
    anomalies::detect_anomalies,
    stats::{calculate_statistics, FieldStats},
};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_FORMAT_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Render a timestamp as ISO 8601 without offset
///
/// Sub-second precision is written as microseconds, and only when non-zero.
pub fn isoformat(ts: &NaiveDateTime) -> String {
    let format = if ts.nanosecond() == 0 {
        ISO_FORMAT
    } else {
        ISO_FORMAT_MICROS
    };
    ts.format(format).to_string()
}

fn round2(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some((value * 100.0).round() / 100.0)
    }
}

/// Full analysis report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// When the report was produced
    pub generated_at: String,
    /// Counts and time span
    pub summary: Summary,
    /// Statistics per sensor id
    pub sensors: BTreeMap<String, SensorSummary>,
    /// Every detected anomaly
    pub anomalies: Vec<AnomalyEntry>,
}

/// Overall counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of readings analysed
    pub total_readings: usize,
    /// Number of distinct sensors
    pub sensor_count: usize,
    /// Earliest and latest timestamp; `null` for an empty input
    pub time_range: Option<TimeRange>,
}

/// Span covered by the readings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRange {
    /// Earliest timestamp
    pub start: String,
    /// Latest timestamp
    pub end: String,
}

/// Rounded statistics for one field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundedStats {
    /// Mean
    pub mean: Option<f64>,
    /// Median
    pub median: Option<f64>,
    /// Population standard deviation
    pub std: Option<f64>,
    /// Minimum
    pub min: Option<f64>,
    /// Maximum
    pub max: Option<f64>,
}

impl From<&FieldStats> for RoundedStats {
    fn from(stats: &FieldStats) -> Self {
        Self {
            mean: round2(stats.mean),
            median: round2(stats.median),
            std: round2(stats.std),
            min: round2(stats.min),
            max: round2(stats.max),
        }
    }
}

/// Statistics for one sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSummary {
    /// Readings counted for the sensor
    pub reading_count: usize,
    /// Temperature statistics
    pub temperature: RoundedStats,
    /// Pressure statistics
    pub pressure: RoundedStats,
    /// Humidity statistics
    pub humidity: RoundedStats,
}

/// One anomaly as reported
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyEntry {
    /// Sensor that produced the value
    pub sensor_id: String,
    /// When the value was read
    pub timestamp: String,
    /// Field that deviated
    pub field: Field,
    /// The deviating value
    pub value: f64,
    /// Z-score rounded to two decimals
    pub z_score: f64,
}

impl Report {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build a report stamped with the current local time
pub fn generate_report(readings: &[Measurement], z_threshold: f64) -> Report {
    generate_report_at(readings, z_threshold, Local::now().naive_local())
}

/// Build a report with an explicit generation time
pub fn generate_report_at(
    readings: &[Measurement],
    z_threshold: f64,
    generated_at: NaiveDateTime,
) -> Report {
    let stats = calculate_statistics(readings);
    let anomalies = detect_anomalies(readings, z_threshold);

    let time_range = readings
        .iter()
        .map(|r| r.timestamp)
        .min()
        .zip(readings.iter().map(|r| r.timestamp).max())
        .map(|(start, end)| TimeRange {
            start: isoformat(&start),
            end: isoformat(&end),
        });

    let sensors = stats
        .iter()
        .map(|(sensor_id, s)| {
            let summary = SensorSummary {
                reading_count: s.reading_count,
                temperature: (&s.temperature).into(),
                pressure: (&s.pressure).into(),
                humidity: (&s.humidity).into(),
            };
            (sensor_id.clone(), summary)
        })
        .collect();

    let anomalies = anomalies
        .into_iter()
        .map(|a| AnomalyEntry {
            sensor_id: a.reading.sensor_id,
            timestamp: isoformat(&a.reading.timestamp),
            field: a.field,
            value: a.value,
            z_score: (a.z_score * 100.0).round() / 100.0,
        })
        .collect();

    log::debug!(
        "report over {} readings from {} sensors",
        readings.len(),
        stats.len()
    );

    Report {
        generated_at: isoformat(&generated_at),
        summary: Summary {
            total_readings: readings.len(),
            sensor_count: stats.len(),
            time_range,
        },
        sensors,
        anomalies,
    }
}
