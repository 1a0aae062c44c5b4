//! Per-identity session state for multi-step time entry.
//!
//! Recording hours takes three pieces of input (date, hours, shift type)
//! that may arrive one at a time. Instead of a global mutable map, each
//! in-progress entry lives in an explicit [`SessionContext`] keyed by the
//! user identity with a clear lifecycle: created on first interaction,
//! cleared on completion or cancellation.

use crate::libs::entry::ShiftType;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Draft of a time entry accumulated across interaction steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub shift: Option<ShiftType>,
}

/// In-progress interaction state for one user identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub identity: String,
    pub draft: EntryDraft,
}

impl SessionContext {
    fn new(identity: &str) -> Self {
        SessionContext {
            identity: identity.to_string(),
            draft: EntryDraft::default(),
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = Some(date);
    }

    pub fn set_hours(&mut self, hours: f64) {
        self.draft.hours = Some(hours);
    }

    pub fn set_shift(&mut self, shift: ShiftType) {
        self.draft.shift = Some(shift);
    }

    pub fn is_complete(&self) -> bool {
        self.draft.date.is_some() && self.draft.hours.is_some() && self.draft.shift.is_some()
    }

    /// Returns the finished entry, or `None` while steps are missing.
    pub fn finish(&self) -> Option<(NaiveDate, f64, ShiftType)> {
        Some((self.draft.date?, self.draft.hours?, self.draft.shift?))
    }
}

/// Session registry keyed by user identity.
#[derive(Debug, Default)]
pub struct Sessions {
    contexts: HashMap<String, SessionContext>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context for the identity, creating it on first use.
    pub fn begin(&mut self, identity: &str) -> &mut SessionContext {
        self.contexts.entry(identity.to_string()).or_insert_with(|| SessionContext::new(identity))
    }

    pub fn get(&self, identity: &str) -> Option<&SessionContext> {
        self.contexts.get(identity)
    }

    /// Drops the context, whether the flow completed or was cancelled.
    pub fn clear(&mut self, identity: &str) {
        self.contexts.remove(identity);
    }
}
