//! CSV ingestion for row validation
//!
//! Thin wrapper that turns a CSV source into [`Row`]s and hands them to
//! [`validate_rows`](crate::batch::validate_rows). The first line is the
//! header; every later record becomes a row keyed by header name.
//!
//! ## Format
//!
//! ```csv
//! timestamp,sensor_id,temperature,pressure,humidity
//! 2024-01-15T10:30:00,TI-A1B2-C3D4,25.0,500.0,50.0
//! ```
//!
//! - Comma separated, `\n` or `\r\n` line endings
//! - Cells may be double-quoted; `""` inside quotes is a literal quote
//! - A quoted cell may contain commas and line breaks
//! - Blank lines outside quotes are skipped
//! - A line shorter than the header only yields the columns it has, so the
//!   row fails parsing with a missing-field error; extra cells are ignored

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    batch::BatchSummary,
    errors::IngestError,
    reading::Row,
    record::ReadingValidator,
};

/// Split one CSV record into cells; `None` while a quoted cell is still open
fn split_record(record: &str) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                cell.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if cell.is_empty() => in_quotes = true,
            (',', false) => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return None;
    }
    cells.push(cell);
    Some(cells)
}

/// Read header-keyed rows from a CSV source
///
/// A quoted cell may span several lines; the line break is kept as `\n`.
pub fn read_csv_rows<R: BufRead>(reader: R) -> Result<Vec<Row>, IngestError> {
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    // First line number and text of a record whose quote is still open
    let mut pending: Option<(usize, String)> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        let (start, record) = match pending.take() {
            Some((start, mut record)) => {
                record.push('\n');
                record.push_str(line);
                (start, record)
            }
            None if line.trim().is_empty() => continue,
            None => (i + 1, line.to_owned()),
        };

        let Some(cells) = split_record(&record) else {
            pending = Some((start, record));
            continue;
        };
        match &header {
            None => header = Some(cells),
            Some(columns) => {
                rows.push(columns.iter().cloned().zip(cells).collect());
            }
        }
    }

    if let Some((line, _)) = pending {
        return Err(IngestError::UnterminatedQuote { line });
    }

    log::debug!("read {} CSV rows", rows.len());
    Ok(rows)
}

impl ReadingValidator {
    /// Read a CSV file and validate all of its rows
    pub fn validate_csv_file(&self, path: impl AsRef<Path>) -> Result<BatchSummary, IngestError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let rows = read_csv_rows(BufReader::new(file))?;
        log::debug!("validating {} rows from {}", rows.len(), path.display());
        Ok(self.validate_rows(&rows))
    }
}

/// Read a CSV file and validate all rows against the default limits
pub fn validate_csv_file(path: impl AsRef<Path>) -> Result<BatchSummary, IngestError> {
    ReadingValidator::default().validate_csv_file(path)
}
