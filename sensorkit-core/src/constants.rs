//! Constants for SensorKit
//!
//! Default acceptance limits and identifier layout for production-line
//! sensor readings. Units are part of every name.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Deployment-specific limits go through [`crate::config::ValidationLimits`],
//!    not by editing these values

use std::num::NonZeroU32;

// ===== TEMPERATURE =====

/// Lowest accepted temperature (°C), inclusive.
///
/// Industrial-grade sensor floor on the production line.
pub const TEMPERATURE_MIN_C: f64 = -40.0;

/// Highest accepted temperature (°C), inclusive.
pub const TEMPERATURE_MAX_C: f64 = 150.0;

// ===== PRESSURE =====

/// Lowest accepted pressure (hPa), inclusive.
pub const PRESSURE_MIN_HPA: f64 = 0.0;

/// Highest accepted pressure (hPa), inclusive.
pub const PRESSURE_MAX_HPA: f64 = 1000.0;

// ===== HUMIDITY =====

/// Lowest accepted relative humidity (%), inclusive.
///
/// Source: definition (0% RH = no water vapor)
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Highest accepted relative humidity (%), inclusive.
///
/// Source: definition (100% RH = saturated)
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

// ===== SENSOR IDENTIFIERS =====

/// Prefix every sensor identifier starts with.
pub const SENSOR_ID_PREFIX: &str = "TI";

/// Separator between identifier segments.
pub const SENSOR_ID_SEPARATOR: u8 = b'-';

/// Characters in each of the two trailing segments (`XXXX`, `YYYY`).
pub const SENSOR_ID_SEGMENT_LEN: usize = 4;

/// Total identifier length: `TI-XXXX-YYYY`.
pub const SENSOR_ID_LEN: usize = SENSOR_ID_PREFIX.len() + 2 * (1 + SENSOR_ID_SEGMENT_LEN);

// ===== ANALYSIS =====

/// Default z-score above which a value counts as anomalous.
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;

/// Default spacing between consecutive readings of one sensor (seconds).
pub const DEFAULT_SAMPLE_INTERVAL_S: NonZeroU32 = match NonZeroU32::new(60) {
    Some(interval) => interval,
    None => panic!("sample interval must be non-zero"),
};
