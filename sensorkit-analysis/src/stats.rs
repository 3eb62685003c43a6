//! Per-sensor descriptive statistics
//!
//! Missing values (NaN) are skipped, so gap-filled series can be analysed
//! directly. A field with no values at all gets NaN for every statistic.

use std::collections::BTreeMap;

use sensorkit_core::{Field, Measurement};

/// The three numeric fields analysed per sensor
pub const MEASURED_FIELDS: [Field; 3] = [Field::Temperature, Field::Pressure, Field::Humidity];

/// Statistics for a single measurement field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value, or the average of the two middle values
    pub median: f64,
    /// Population standard deviation
    pub std: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl FieldStats {
    /// All statistics undefined
    pub const EMPTY: FieldStats = FieldStats {
        mean: f64::NAN,
        median: f64::NAN,
        std: f64::NAN,
        min: f64::NAN,
        max: f64::NAN,
    };

    /// Compute statistics over `values`
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::EMPTY;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        Self {
            mean,
            median,
            std: variance.sqrt(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Statistics for one sensor
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResult {
    /// Sensor identifier
    pub sensor_id: String,
    /// Largest number of non-missing values among the three fields
    pub reading_count: usize,
    /// Temperature statistics
    pub temperature: FieldStats,
    /// Pressure statistics
    pub pressure: FieldStats,
    /// Humidity statistics
    pub humidity: FieldStats,
}

impl StatsResult {
    /// Statistics for a numeric field; `None` for text fields
    pub fn field(&self, field: Field) -> Option<&FieldStats> {
        match field {
            Field::Temperature => Some(&self.temperature),
            Field::Pressure => Some(&self.pressure),
            Field::Humidity => Some(&self.humidity),
            Field::Timestamp | Field::SensorId => None,
        }
    }
}

#[derive(Default)]
struct Samples {
    temperature: Vec<f64>,
    pressure: Vec<f64>,
    humidity: Vec<f64>,
}

impl Samples {
    fn push(&mut self, reading: &Measurement) {
        for (bucket, value) in [
            (&mut self.temperature, reading.temperature),
            (&mut self.pressure, reading.pressure),
            (&mut self.humidity, reading.humidity),
        ] {
            if !value.is_nan() {
                bucket.push(value);
            }
        }
    }
}

/// Group readings by sensor and compute statistics for each
pub fn calculate_statistics(readings: &[Measurement]) -> BTreeMap<String, StatsResult> {
    let mut by_sensor: BTreeMap<&str, Samples> = BTreeMap::new();
    for reading in readings {
        by_sensor.entry(&reading.sensor_id).or_default().push(reading);
    }

    by_sensor
        .into_iter()
        .map(|(sensor_id, samples)| {
            let reading_count = samples
                .temperature
                .len()
                .max(samples.pressure.len())
                .max(samples.humidity.len());
            let result = StatsResult {
                sensor_id: sensor_id.to_owned(),
                reading_count,
                temperature: FieldStats::from_values(&samples.temperature),
                pressure: FieldStats::from_values(&samples.pressure),
                humidity: FieldStats::from_values(&samples.humidity),
            };
            (sensor_id.to_owned(), result)
        })
        .collect()
}
