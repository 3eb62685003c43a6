//! Cleaning and Analysis for Sensor Measurements
//!
//! ## Overview
//!
//! Works on [`Measurement`]s, readings whose timestamps have already been
//! parsed by `sensorkit-core`. Everything here is a pure function over
//! slices.
//!
//! ### Cleaning
//! - [`remove_duplicates`]: one reading per `(timestamp, sensor_id)`
//! - [`clamp_outliers`]: pull values into the configured limits
//! - [`fill_missing_timestamps`]: mark skipped sampling slots with NaN
//!   placeholders ([`fill_missing_timestamps_default`] samples every minute)
//!
//! ### Analysis
//! - [`calculate_statistics`]: mean / median / std / min / max per sensor
//! - [`detect_anomalies`]: z-score outliers per sensor and field
//! - [`generate_report`]: both of the above as a JSON-ready document
//!
//! ## Usage Example
//!
//! ```rust
//! use std::num::NonZeroU32;
//! use sensorkit_analysis::{fill_missing_timestamps, generate_report};
//! use sensorkit_core::{Measurement, SensorReading};
//!
//! let raw = [
//!     SensorReading::new("2024-01-01T12:00:00", "TI-A1B2-C3D4", 25.0, 500.0, 50.0),
//!     SensorReading::new("2024-01-01T12:02:00", "TI-A1B2-C3D4", 26.0, 501.0, 51.0),
//! ];
//! let measurements = raw
//!     .iter()
//!     .map(Measurement::try_from)
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let filled = fill_missing_timestamps(&measurements, NonZeroU32::new(60).unwrap());
//! assert_eq!(filled.len(), 3);
//!
//! let report = generate_report(&filled, 2.0);
//! assert_eq!(report.summary.sensor_count, 1);
//! # Ok::<(), sensorkit_core::ValidationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod anomalies;
pub mod cleaners;
pub mod report;
pub mod stats;

pub use anomalies::{detect_anomalies, Anomaly};
pub use cleaners::{
    clamp_outliers, fill_missing_timestamps, fill_missing_timestamps_default, remove_duplicates,
};
pub use report::{generate_report, generate_report_at, Report};
pub use stats::{calculate_statistics, FieldStats, StatsResult};

pub use sensorkit_core::constants::DEFAULT_Z_THRESHOLD;
pub use sensorkit_core::Measurement;
