//! # tabel
//!
//! Records worked hours per employee, date, and shift, and generates
//! formatted Excel work time reports over arbitrary date ranges.
//!
//! ## Features
//!
//! - **Time recording**: one entry per employee, date, and shift (day or
//!   night), updated in place on re-entry
//! - **Reports**: per-employee daily breakdowns with shift subtotals, daily
//!   totals, anomaly notes, and explicit markers for days without data
//! - **Roles**: managers report across all employees; everyone else gets
//!   their personal report
//! - **Export**: raw entry dumps in CSV, JSON, or Excel

pub mod commands;
pub mod db;
pub mod libs;
