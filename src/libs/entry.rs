//! Domain types for recorded work hours.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Classification of worked hours, driving separate accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
}

impl ShiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "day" => Some(ShiftType::Day),
            "night" => Some(ShiftType::Night),
            _ => None,
        }
    }
}

/// A single recorded block of hours for one employee, date, and shift.
///
/// The date stays a `DD.MM.YYYY` string as stored; entries whose date fails
/// to parse are tolerated in the store and silently excluded from
/// aggregation rather than failing a whole report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub date: String,
    pub hours: f64,
    pub shift: ShiftType,
    pub recorded_at: NaiveDateTime,
}
