//! Reporting period parsing and validation.
//!
//! A period is an inclusive closed date range entered as two `DD.MM.YYYY`
//! strings. Validation happens once, up front, before any aggregation work:
//! a period that fails here never reaches the report pipeline. Successful
//! validation reports the inclusive day count so callers can echo it back
//! to the user.
//!
//! ## Validation Rules
//!
//! - Both dates must parse in the `DD.MM.YYYY` format
//! - The start date must not be later than the end date
//! - The span (end minus start) must not exceed a configurable maximum,
//!   180 days by default

use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Date format used for all user-facing and stored dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Default upper bound for a reporting period span, in days.
pub const DEFAULT_MAX_PERIOD_DAYS: i64 = 180;

/// Structured validation failures for a reporting period.
///
/// Each variant carries the descriptive message the caller shows to the
/// user; the core itself never prints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidFormat,
    #[error("Start date cannot be later than end date")]
    StartAfterEnd,
    #[error("Period cannot exceed {0} days")]
    TooLong(i64),
}

/// An inclusive, validated date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Parses and validates a period from two `DD.MM.YYYY` strings.
    ///
    /// `max_days` bounds the span between the two dates; the original
    /// limit of 180 days keeps report generation work bounded.
    pub fn parse(start: &str, end: &str, max_days: i64) -> Result<Self, PeriodError> {
        let start = parse_date(start).ok_or(PeriodError::InvalidFormat)?;
        let end = parse_date(end).ok_or(PeriodError::InvalidFormat)?;

        if start > end {
            return Err(PeriodError::StartAfterEnd);
        }
        if end - start > Duration::days(max_days) {
            return Err(PeriodError::TooLong(max_days));
        }

        Ok(Period { start, end })
    }

    /// Inclusive number of calendar days covered by the period.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether the given date falls within the period, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Enumerates every calendar date in the period, in ascending order.
    ///
    /// This drives range completion: each enumerated date must appear in
    /// the per-employee day sequence, synthesized with zero hours when no
    /// raw data exists for it.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.days() as usize)
    }
}

/// Parses a `DD.MM.YYYY` date, returning `None` on any mismatch.
///
/// Used both for period bounds (where failure is a validation error) and
/// for stored entry dates (where failure silently excludes the record).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Formats a date in the `DD.MM.YYYY` user-facing format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
