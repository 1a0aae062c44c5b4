//! Aggregation of raw time entries into per-employee daily breakdowns.
//!
//! This is the data-shape core of the report pipeline: a flat collection of
//! `(employee, date, shift, hours)` records plus an optional period becomes
//! a per-employee mapping from calendar date to day/night hour buckets.
//!
//! ## Policy
//!
//! - Entries of unknown or inactive employees are dropped silently.
//! - With a period, entries outside the inclusive range are dropped, and so
//!   are entries whose stored date fails to parse. Tolerating malformed
//!   rows is deliberate: one bad record must not fail a whole report.
//! - Multiple entries for the same (employee, date, shift) key sum at read
//!   time. The write path keeps at most one row per key, so summation only
//!   surfaces rows written past the upsert contract.
//! - With a period, range completion guarantees every calendar date in the
//!   range appears per employee, synthesized with zero hours when nothing
//!   was recorded. Zero-hour days are "no data" days: excluded from totals
//!   and from the daily-limit check.
//!
//! The result is a pure value; aggregating the same inputs twice yields
//! identical structures.

use crate::db::employees::Employee;
use crate::libs::entry::{ShiftType, TimeEntry};
use crate::libs::period::{self, Period};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Combined day+night hours above this flag a daily anomaly.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Day/night hour buckets for one employee on one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayHours {
    pub day: f64,
    pub night: f64,
}

impl DayHours {
    pub fn total(&self) -> f64 {
        self.day + self.night
    }

    /// A date counts as having data when either shift is nonzero.
    pub fn has_data(&self) -> bool {
        self.day != 0.0 || self.night != 0.0
    }

    /// Strictly greater than 24 combined hours; exactly 24 is accepted.
    pub fn exceeds_limit(&self) -> bool {
        self.has_data() && self.total() > MAX_DAILY_HOURS
    }

    fn add(&mut self, shift: ShiftType, hours: f64) {
        match shift {
            ShiftType::Day => self.day += hours,
            ShiftType::Night => self.night += hours,
        }
    }
}

/// Ordered daily breakdown for a single employee.
///
/// The `BTreeMap` keeps dates in ascending chronological order, which is
/// the order the renderer emits rows in.
#[derive(Debug, Clone)]
pub struct EmployeeHours {
    pub name: String,
    pub days: BTreeMap<NaiveDate, DayHours>,
}

impl EmployeeHours {
    /// Number of dates carrying actual recorded hours.
    pub fn days_with_data(&self) -> usize {
        self.days.values().filter(|d| d.has_data()).count()
    }
}

/// Aggregation result: employees in first-encounter order, days ascending.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub employees: Vec<EmployeeHours>,
}

impl Aggregate {
    /// True when no entry survived filtering; the report is then rendered
    /// entirely from placeholders, with an advisory note for the caller.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&EmployeeHours> {
        self.employees.iter().find(|e| e.name == name)
    }
}

/// Transforms raw entries into a per-employee, per-date breakdown.
///
/// Only employees marked active participate. `employee_filter` narrows the
/// result to a single employee id. When `period` is given, entries outside
/// it are dropped and the result is range-completed so that every date in
/// the inclusive range appears in each employee's day sequence; without a
/// period only dates present in the data appear.
pub fn aggregate(entries: &[TimeEntry], employees: &[Employee], period: Option<Period>, employee_filter: Option<i64>) -> Aggregate {
    let active: HashMap<i64, &str> = employees.iter().filter(|e| e.active).map(|e| (e.id, e.full_name.as_str())).collect();

    let mut result = Aggregate::default();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for entry in entries {
        if let Some(filter) = employee_filter {
            if entry.employee_id != filter {
                continue;
            }
        }
        let name = match active.get(&entry.employee_id) {
            Some(name) => *name,
            None => continue, // orphaned or inactive employee
        };
        // Malformed dates are excluded silently, never an error.
        let date = match period::parse_date(&entry.date) {
            Some(date) => date,
            None => continue,
        };
        if let Some(p) = period {
            if !p.contains(date) {
                continue;
            }
        }

        let pos = *index.entry(entry.employee_id).or_insert_with(|| {
            result.employees.push(EmployeeHours {
                name: name.to_string(),
                days: BTreeMap::new(),
            });
            result.employees.len() - 1
        });
        result.employees[pos].days.entry(date).or_default().add(entry.shift, entry.hours);
    }

    if let Some(p) = period {
        complete_range(&mut result, &p);
    }

    result
}

/// Ensures every calendar date in the period appears per employee.
///
/// Dates with no raw data get a zero `DayHours` placeholder so the renderer
/// can emit explicit absence markers instead of skipping rows.
fn complete_range(aggregate: &mut Aggregate, period: &Period) {
    for employee in &mut aggregate.employees {
        for date in period.dates() {
            employee.days.entry(date).or_default();
        }
    }
}
