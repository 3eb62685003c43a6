//! Timestamp validator
//!
//! Accepts ISO 8601 date-times in extended or basic form:
//!
//! ```text
//! 2024-01-15T10:30:00Z             UTC designator
//! 2024-01-15T10:30:00+02:00        offset (also +0200, +02, +02:00:00)
//! 2024-01-15T10:30:00.250          fractional seconds (`.` or `,`)
//! 2024-01-15 10:30:00              space separator
//! 2024-01-15T10:30                 no seconds
//! 2024-01-15T10                    hour only
//! 20240115T103000                  basic form
//! 2024-01-15                       date only (midnight)
//! ```
//!
//! Offset-carrying timestamps are normalised to UTC so that readings from
//! differently configured loggers compare on one timeline.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    errors::{Field, ValidationError, ValidationResult},
    traits::Validator,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split `s` into two-digit groups, either at `:` or every two characters
fn two_digit_groups(s: &str) -> Option<Vec<&str>> {
    let groups: Vec<&str> = if s.contains(':') {
        s.split(':').collect()
    } else {
        (0..s.len())
            .step_by(2)
            .map(|i| s.get(i..i + 2))
            .collect::<Option<_>>()?
    };

    let well_formed = (1..=3).contains(&groups.len())
        && groups.iter().all(|g| g.len() == 2 && is_digits(g));
    well_formed.then_some(groups)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() == 8 && is_digits(s) {
        let year = s[..4].parse().ok()?;
        let month = s[4..6].parse().ok()?;
        let day = s[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// `HH[:MM[:SS[.f]]]` or `HH[MM[SS[.f]]]`
fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.replacen(',', ".", 1);
    let (clock, fraction) = s.split_at(s.find('.').unwrap_or(s.len()));

    let groups = two_digit_groups(clock)?;
    if groups.len() < 3 && !fraction.is_empty() {
        return None;
    }

    match groups.as_slice() {
        [hour] => NaiveTime::parse_from_str(&format!("{hour}:00"), "%H:%M").ok(),
        [hour, minute] => NaiveTime::parse_from_str(&format!("{hour}:{minute}"), "%H:%M").ok(),
        [hour, minute, second] => NaiveTime::parse_from_str(
            &format!("{hour}:{minute}:{second}{fraction}"),
            "%H:%M:%S%.f",
        )
        .ok(),
        _ => None,
    }
}

/// Offset in seconds east of UTC, from `HH`, `HHMM`, `HH:MM` or `HH:MM:SS`
fn parse_offset(s: &str) -> Option<i64> {
    let groups = two_digit_groups(s)?;
    let mut parts = groups.iter().map(|g| g.parse::<i64>());
    let hours = parts.next()?.ok()?;
    let minutes = parts.next().transpose().ok()?.unwrap_or(0);
    let seconds = parts.next().transpose().ok()?.unwrap_or(0);

    (hours < 24 && minutes < 60 && seconds < 60).then_some(hours * 3600 + minutes * 60 + seconds)
}

/// Separate a trailing `Z` or `±offset` from the time of day
fn split_offset(time: &str) -> Option<(&str, i64)> {
    if let Some(local) = time.strip_suffix(|c: char| matches!(c, 'Z' | 'z')) {
        return Some((local, 0));
    }

    match time.rfind(|c: char| matches!(c, '+' | '-')) {
        Some(pos) => {
            let (local, offset) = time.split_at(pos);
            let seconds = parse_offset(&offset[1..])?;
            let sign = if offset.starts_with('-') { -1 } else { 1 };
            Some((local, sign * seconds))
        }
        None => Some((time, 0)),
    }
}

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    let Some(sep) = value.find(|c: char| matches!(c, 'T' | 't' | ' ')) else {
        return parse_date(value).map(|date| date.and_time(NaiveTime::MIN));
    };

    let date = parse_date(&value[..sep])?;
    let (time, offset) = split_offset(&value[sep + 1..])?;
    date.and_time(parse_time(time)?)
        .checked_sub_signed(Duration::seconds(offset))
}

/// Parse an ISO 8601 timestamp into a naive UTC/local datetime
pub fn parse_timestamp(value: &str) -> ValidationResult<NaiveDateTime> {
    parse_iso(value).ok_or_else(|| ValidationError::MalformedTimestamp {
        value: value.to_owned(),
    })
}

/// Validator for ISO 8601 timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampValidator;

impl Validator for TimestampValidator {
    type Value = str;

    fn validate(&self, value: &str) -> ValidationResult<()> {
        parse_timestamp(value).map(|_| ())
    }

    fn field(&self) -> Field {
        Field::Timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn accepted_shapes() {
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z").unwrap(), at(2024, 1, 1, 0, 0, 0));
        assert_eq!(parse_timestamp("2024-01-15T10:30:00").unwrap(), at(2024, 1, 15, 10, 30, 0));
        assert_eq!(parse_timestamp("2024-01-15 10:30:00").unwrap(), at(2024, 1, 15, 10, 30, 0));
        assert_eq!(parse_timestamp("2024-01-15T10:30").unwrap(), at(2024, 1, 15, 10, 30, 0));
        assert_eq!(parse_timestamp("2024-01-15").unwrap(), at(2024, 1, 15, 0, 0, 0));
    }

    #[test]
    fn offsets_normalise_to_utc() {
        assert_eq!(
            parse_timestamp("2024-01-15T12:30:00+02:00").unwrap(),
            at(2024, 1, 15, 10, 30, 0)
        );
        assert_eq!(
            parse_timestamp("2024-01-15 12:30:00+02:00").unwrap(),
            at(2024, 1, 15, 10, 30, 0)
        );
    }

    #[test]
    fn offset_variants() {
        let expected = at(2024, 1, 15, 8, 30, 0);
        for value in [
            "2024-01-15T10:30+02:00",
            "2024-01-15T10:30:00+0200",
            "2024-01-15T10:30:00+02",
            "2024-01-15 10:30:00+02:00:00",
            "2024-01-15T06:30:00-02:00",
            "20240115T083000Z",
        ] {
            assert_eq!(parse_timestamp(value).unwrap(), expected, "{value:?}");
        }
    }

    #[test]
    fn basic_and_reduced_forms() {
        assert_eq!(parse_timestamp("20240115T103000").unwrap(), at(2024, 1, 15, 10, 30, 0));
        assert_eq!(parse_timestamp("20240115T1030").unwrap(), at(2024, 1, 15, 10, 30, 0));
        assert_eq!(parse_timestamp("20240115").unwrap(), at(2024, 1, 15, 0, 0, 0));
        assert_eq!(parse_timestamp("2024-01-15T10").unwrap(), at(2024, 1, 15, 10, 0, 0));
    }

    #[test]
    fn comma_fraction() {
        let parsed = parse_timestamp("2024-01-15T10:30:00,5").unwrap();
        assert_eq!(parsed, at(2024, 1, 15, 10, 30, 0) + chrono::Duration::milliseconds(500));
    }

    #[test]
    fn fractional_seconds() {
        let parsed = parse_timestamp("2024-01-15T10:30:00.250").unwrap();
        assert_eq!(parsed, at(2024, 1, 15, 10, 30, 0) + chrono::Duration::milliseconds(250));
    }

    #[test]
    fn rejects_garbage() {
        for value in [
            "not-a-date",
            "",
            "2024-13-01T00:00:00",
            "2024-02-30",
            "15/01/2024",
            "2024-01-15T1",
            "2024-01-15T10:30.5",
            "2024-01-15T10:30:00+2",
            "2024-01-15T10:30:00+24:00",
            "2024-01-15T",
            "2024-01-15T10:30:00 ",
        ] {
            assert!(
                matches!(
                    TimestampValidator.validate(value),
                    Err(ValidationError::MalformedTimestamp { .. })
                ),
                "{value:?} should fail"
            );
        }
    }
}
