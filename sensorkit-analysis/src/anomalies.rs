//! Z-score anomaly detection
//!
//! A value is anomalous when it lies more than `z_threshold` population
//! standard deviations from its sensor's mean for that field:
//!
//! ```text
//! z = |value - mean| / std        anomalous iff z > z_threshold
//! ```
//!
//! Fields with zero spread (a constant series) cannot produce a z-score and
//! are skipped, as are missing values.

use sensorkit_core::{Field, Measurement};

use crate::stats::{calculate_statistics, MEASURED_FIELDS};

/// A value that deviates from its sensor's norm
#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    /// The reading containing the value
    pub reading: Measurement,
    /// Field that deviated
    pub field: Field,
    /// The deviating value
    pub value: f64,
    /// Distance from the mean in standard deviations
    pub z_score: f64,
}

/// Find values further than `z_threshold` standard deviations from the mean
///
/// Anomalies are returned in input order, fields in
/// temperature / pressure / humidity order within a reading.
pub fn detect_anomalies(readings: &[Measurement], z_threshold: f64) -> Vec<Anomaly> {
    let stats = calculate_statistics(readings);
    let mut anomalies = Vec::new();

    for reading in readings {
        let Some(sensor) = stats.get(&reading.sensor_id) else {
            continue;
        };

        for field in MEASURED_FIELDS {
            let (Some(value), Some(field_stats)) = (reading.value(field), sensor.field(field)) else {
                continue;
            };
            if value.is_nan() || field_stats.std == 0.0 {
                continue;
            }

            let z_score = (value - field_stats.mean).abs() / field_stats.std;
            if z_score > z_threshold {
                anomalies.push(Anomaly {
                    reading: reading.clone(),
                    field,
                    value,
                    z_score,
                });
            }
        }
    }

    if !anomalies.is_empty() {
        log::info!(
            "{} anomalies found in {} readings (z > {})",
            anomalies.len(),
            readings.len(),
            z_threshold
        );
    }
    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sensorkit_core::constants::DEFAULT_Z_THRESHOLD;

    fn series(temperatures: &[f64]) -> Vec<Measurement> {
        temperatures
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
                    .and_then(|d| d.and_hms_opt(12, i as u32, 0))
                    .unwrap();
                Measurement::new(ts, "TI-A1B2-C3D4", t, 500.0, 50.0)
            })
            .collect()
    }

    #[test]
    fn spike_is_detected() {
        let mut temps = vec![25.0; 9];
        temps.push(100.0);
        let anomalies = detect_anomalies(&series(&temps), DEFAULT_Z_THRESHOLD);

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].field, Field::Temperature);
        assert_eq!(anomalies[0].value, 100.0);
        // mean 32.5, std 22.5 -> z = 3
        assert!((anomalies[0].z_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn constant_series_has_no_anomalies() {
        assert!(detect_anomalies(&series(&[25.0; 5]), DEFAULT_Z_THRESHOLD).is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        // mean 0, std 1 -> both values sit at exactly z = 1
        let anomalies = detect_anomalies(&series(&[-1.0, 1.0]), 1.0);
        assert!(anomalies.is_empty());

        let anomalies = detect_anomalies(&series(&[-1.0, 1.0]), 0.5);
        assert_eq!(anomalies.len(), 2);
    }

    #[test]
    fn missing_values_are_skipped() {
        let mut readings = series(&[20.0, 30.0, 20.0, 30.0]);
        readings.push(Measurement::placeholder(readings[0].timestamp, "TI-A1B2-C3D4"));
        let anomalies = detect_anomalies(&readings, 0.5);
        assert_eq!(anomalies.len(), 4);
        assert!(anomalies.iter().all(|a| !a.value.is_nan()));
    }
}
