//! Time entry storage with a keyed upsert contract.
//!
//! The write path treats (employee, date, shift) as the record key: a
//! second write for the same key updates the hours and the recorded-at
//! timestamp in place instead of appending a row. The read path hands the
//! raw rows to the aggregator, which sums whatever it finds per key, so a
//! row written past this contract stays visible instead of being masked.

use crate::db::db::Db;
use crate::libs::entry::{ShiftType, TimeEntry};
use crate::libs::period::{self, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const SCHEMA_TIME_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS time_entries (
    id INTEGER PRIMARY KEY,
    employee_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    hours REAL NOT NULL,
    shift TEXT NOT NULL,
    recorded_at TIMESTAMP NOT NULL
);";
const UPDATE_HOURS: &str =
    "UPDATE time_entries SET hours = ?1, recorded_at = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE employee_id = ?2 AND date = ?3 AND shift = ?4";
const INSERT: &str =
    "INSERT INTO time_entries (employee_id, date, hours, shift, recorded_at) VALUES (?1, ?2, ?3, ?4, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_ALL: &str = "SELECT id, employee_id, date, hours, shift, recorded_at FROM time_entries";

/// Result of an upsert: whether the keyed row existed before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

pub struct TimeEntries {
    conn: Connection,
}

impl TimeEntries {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TIME_ENTRIES, [])?;
        Ok(TimeEntries { conn: db.conn })
    }

    /// Records hours for (employee, date, shift), updating in place when a
    /// row for that key already exists.
    pub fn upsert(&mut self, employee_id: i64, date: NaiveDate, shift: ShiftType, hours: f64) -> Result<UpsertOutcome> {
        let date_str = date.format(DATE_FORMAT).to_string();
        let updated = self.conn.execute(UPDATE_HOURS, params![hours, employee_id, date_str, shift.as_str()])?;
        if updated > 0 {
            return Ok(UpsertOutcome::Updated);
        }
        self.conn.execute(INSERT, params![employee_id, date_str, hours, shift.as_str()])?;
        Ok(UpsertOutcome::Inserted)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<TimeEntry>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let iter = stmt.query_map([], |row| {
            let shift_str: String = row.get(4)?;
            let shift = ShiftType::from_str(&shift_str).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, format!("unknown shift type '{}'", shift_str).into())
            })?;
            Ok(TimeEntry {
                id: row.get(0)?,
                employee_id: row.get(1)?,
                date: row.get(2)?,
                hours: row.get(3)?,
                shift,
                recorded_at: row.get(5)?,
            })
        })?;
        let mut entries = Vec::new();
        for entry in iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Sorted list of dates that carry at least one entry, used as a hint
    /// when asking for a report period. Malformed dates are skipped.
    pub fn available_dates(&mut self) -> Result<Vec<NaiveDate>> {
        let entries = self.fetch_all()?;
        let mut dates: Vec<NaiveDate> = entries.iter().filter_map(|e| period::parse_date(&e.date)).collect();
        dates.sort();
        dates.dedup();
        Ok(dates)
    }
}
