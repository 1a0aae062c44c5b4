//! Display implementation for tabel application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and the rest of the code deals only in typed [`Message`]
//! values. Messages with dynamic content interpolate their parameters;
//! commands decide the severity prefix through the `msg_*` macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(name) => format!("Employee '{}' added", name),
            Message::EmployeeDeactivated(name) => format!("Employee '{}' deactivated", name),
            Message::EmployeeClaimed(name) => format!("Your identity is now linked to '{}'", name),
            Message::EmployeeNotFoundWithId(id) => format!("No active employee with ID {}", id),
            Message::NoActiveEmployees => "No active employees found".to_string(),
            Message::IdentityNotSet => "No identity configured. Run 'tabel init' first".to_string(),
            Message::IdentityNotLinked => "No employee record matches your identity. Ask a manager to add you, then run 'tabel employee claim'".to_string(),

            // === MANAGER MESSAGES ===
            Message::ManagerAdded(name) => format!("Manager '{}' added", name),
            Message::ManagerRemoved(id) => format!("Manager '{}' removed", id),
            Message::ManagerOnlyReports => "Only managers can report on other employees. Generating your personal report instead".to_string(),

            // === TIME ENTRY MESSAGES ===
            Message::EntryAdded { date, hours, shift } => {
                format!("Hours recorded\nDate: {}\nHours: {}\nShift: {}", date, hours, shift)
            }
            Message::EntryUpdated { date, hours, shift } => {
                format!("Existing entry updated\nDate: {}\nHours: {}\nShift: {}", date, hours, shift)
            }
            Message::HoursOutOfRange => "Hours must be greater than 0 and at most 24".to_string(),
            Message::PromptEntryDate => "Date (DD.MM.YYYY)".to_string(),
            Message::PromptEntryHours => "Worked hours (e.g. 8 or 7.5)".to_string(),
            Message::PromptShiftType => "Shift type".to_string(),

            // === ENTRY LISTING MESSAGES ===
            Message::EntriesHeader(days) => format!("Your entries for the last {} days", days),
            Message::NoEntriesInPeriod(days) => format!("You have no entries for the last {} days", days),
            Message::EntriesTotals { days, day, night } => {
                let total = day + night;
                let average = total / (*days).max(1) as f64;
                format!(
                    "Days with entries: {}\nDay hours: {}\nNight hours: {}\nTotal: {}\nAverage per day: {:.1}",
                    days, day, night, total, average
                )
            }

            // === REPORT MESSAGES ===
            Message::GeneratingReport => "Generating report...".to_string(),
            Message::PeriodValid(days) => format!("Period is valid: {} days", days),
            Message::ReportSaved(path) => format!("Report saved to {}", path),
            Message::NoDataInPeriodAdvisory => {
                "No entries in the requested period. The report shows every day of the period with placeholders".to_string()
            }
            Message::AvailableDataHint(first, last) => format!("Hint: entries exist from {} to {}", first, last),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
        };
        write!(f, "{}", text)
    }
}
