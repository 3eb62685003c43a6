//! Batch and row validation
//!
//! Summarises how many readings in a batch passed and, for each failure,
//! where it was and what was wrong. Rows of string cells (as read from
//! CSV) go through the same path after parsing; a row that cannot be
//! parsed counts as invalid with a `Row {index}: ...` message.
//!
//! Error indices always refer to positions in the caller's input.

use crate::{
    reading::{Row, SensorReading},
    record::ReadingValidator,
};

/// Errors reported for one invalid reading or row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowErrors {
    /// Position in the input
    pub index: usize,
    /// One message per problem found
    pub messages: Vec<String>,
}

/// Summary of a batch validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Items processed
    pub total: usize,
    /// Items without problems
    pub valid: usize,
    /// Items with at least one problem
    pub invalid: usize,
    /// Details for every invalid item, by ascending index
    pub errors: Vec<RowErrors>,
}

impl BatchSummary {
    fn push(&mut self, index: usize, messages: Vec<String>) {
        self.total += 1;
        if messages.is_empty() {
            self.valid += 1;
        } else {
            self.invalid += 1;
            self.errors.push(RowErrors { index, messages });
        }
    }

    fn log_outcome(&self, what: &str) {
        if self.invalid > 0 {
            log::warn!("{} of {} {} failed validation", self.invalid, self.total, what);
        } else {
            log::debug!("all {} {} passed validation", self.total, what);
        }
    }

    /// Whether every item passed
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

impl ReadingValidator {
    /// Validate every reading and summarise the outcome
    pub fn validate_batch(&self, readings: &[SensorReading]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for (index, reading) in readings.iter().enumerate() {
            summary.push(index, self.validate(reading).messages());
        }
        summary.log_outcome("readings");
        summary
    }

    /// Parse and validate rows of string cells
    pub fn validate_rows(&self, rows: &[Row]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for (index, row) in rows.iter().enumerate() {
            let messages = match SensorReading::from_row(row) {
                Ok(reading) => self.validate(&reading).messages(),
                Err(err) => vec![format!("Row {index}: {err}")],
            };
            summary.push(index, messages);
        }
        summary.log_outcome("rows");
        summary
    }
}

/// Validate a batch of readings against the default limits
pub fn validate_batch(readings: &[SensorReading]) -> BatchSummary {
    ReadingValidator::default().validate_batch(readings)
}

/// Validate rows of string cells against the default limits
pub fn validate_rows(rows: &[Row]) -> BatchSummary {
    ReadingValidator::default().validate_rows(rows)
}
