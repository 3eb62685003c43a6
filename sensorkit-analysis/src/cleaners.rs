//! Data cleaning for measurement series
//!
//! Every cleaner takes a slice and returns a new vector; the input is
//! never modified.

use std::{
    collections::{BTreeMap, HashSet},
    num::NonZeroU32,
};

use chrono::{Duration, NaiveDateTime};
use sensorkit_core::{constants::DEFAULT_SAMPLE_INTERVAL_S, Measurement, ValidationLimits};

/// Drop repeated `(timestamp, sensor_id)` pairs, keeping the first
///
/// Order of the surviving readings is preserved.
pub fn remove_duplicates(readings: &[Measurement]) -> Vec<Measurement> {
    let mut seen: HashSet<(NaiveDateTime, &str)> = HashSet::with_capacity(readings.len());

    let kept: Vec<Measurement> = readings
        .iter()
        .filter(|r| seen.insert((r.timestamp, r.sensor_id.as_str())))
        .cloned()
        .collect();

    if kept.len() < readings.len() {
        log::debug!("removed {} duplicate readings", readings.len() - kept.len());
    }
    kept
}

/// Pull every value into its configured range
///
/// Out-of-range values are replaced by the nearest bound. Missing (NaN)
/// values stay missing.
pub fn clamp_outliers(readings: &[Measurement], limits: &ValidationLimits) -> Vec<Measurement> {
    readings
        .iter()
        .map(|r| Measurement {
            temperature: limits.temperature.clamp(r.temperature),
            pressure: limits.pressure.clamp(r.pressure),
            humidity: limits.humidity.clamp(r.humidity),
            ..r.clone()
        })
        .collect()
}

/// Insert placeholders where a sensor skipped its sampling interval
///
/// Readings are grouped per sensor and ordered by time. Between two
/// consecutive readings a placeholder is inserted at every
/// `previous + k * interval` strictly before the next reading. The result
/// is sorted by `(timestamp, sensor_id)`.
pub fn fill_missing_timestamps(
    readings: &[Measurement],
    interval_seconds: NonZeroU32,
) -> Vec<Measurement> {
    let interval = Duration::seconds(i64::from(interval_seconds.get()));

    let mut by_sensor: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for reading in readings {
        by_sensor.entry(&reading.sensor_id).or_default().push(reading);
    }

    let mut result = Vec::with_capacity(readings.len());
    let mut inserted = 0usize;

    for (sensor_id, mut series) in by_sensor {
        series.sort_by_key(|r| r.timestamp);

        for (i, reading) in series.iter().enumerate() {
            result.push((*reading).clone());

            let Some(next) = series.get(i + 1) else {
                continue;
            };
            let mut expected = reading.timestamp.checked_add_signed(interval);
            while let Some(ts) = expected.filter(|ts| *ts < next.timestamp) {
                result.push(Measurement::placeholder(ts, sensor_id));
                inserted += 1;
                expected = ts.checked_add_signed(interval);
            }
        }
    }

    if inserted > 0 {
        log::debug!("inserted {inserted} placeholder readings");
    }

    result.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.sensor_id.cmp(&b.sensor_id))
    });
    result
}

/// [`fill_missing_timestamps`] at the default one-minute interval
pub fn fill_missing_timestamps_default(readings: &[Measurement]) -> Vec<Measurement> {
    fill_missing_timestamps(readings, DEFAULT_SAMPLE_INTERVAL_S)
}
