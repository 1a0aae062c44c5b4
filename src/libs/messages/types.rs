#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,

    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(String),
    EmployeeDeactivated(String),
    EmployeeClaimed(String),
    EmployeeNotFoundWithId(i64),
    NoActiveEmployees,
    IdentityNotSet,
    IdentityNotLinked,

    // === MANAGER MESSAGES ===
    ManagerAdded(String),
    ManagerRemoved(String),
    ManagerOnlyReports,

    // === TIME ENTRY MESSAGES ===
    EntryAdded { date: String, hours: f64, shift: String },
    EntryUpdated { date: String, hours: f64, shift: String },
    HoursOutOfRange,
    PromptEntryDate,
    PromptEntryHours,
    PromptShiftType,

    // === ENTRY LISTING MESSAGES ===
    EntriesHeader(i64),     // days
    NoEntriesInPeriod(i64), // days
    EntriesTotals { days: usize, day: f64, night: f64 },

    // === REPORT MESSAGES ===
    GeneratingReport,
    PeriodValid(i64), // inclusive day count
    ReportSaved(String),
    NoDataInPeriodAdvisory,
    AvailableDataHint(String, String), // first and last date with data

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
}
