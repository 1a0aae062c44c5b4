//! Work time report generation.
//!
//! Validates the requested period, aggregates all stored entries, renders
//! the xlsx document, and writes it to disk. Managers may report across
//! all employees or a single one; everyone else always gets their personal
//! report. A period with no data still produces a complete report (every
//! day rendered as placeholders) plus an advisory message; it is never an
//! error.

use crate::{
    db::{employees::Employees, managers::Managers, time_entries::TimeEntries},
    libs::{
        aggregate,
        config::Config,
        messages::Message,
        period::{self, Period},
        render,
    },
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Period start, DD.MM.YYYY
    #[arg(long)]
    from: String,
    /// Period end, DD.MM.YYYY
    #[arg(long)]
    to: String,
    /// Report on a single employee by id (managers only)
    #[arg(long)]
    employee: Option<i64>,
    /// Output file path; defaults to report_<from>_<to>.xlsx
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let identity = match config.identity {
        Some(ref identity) => identity,
        None => msg_bail_anyhow!(Message::IdentityNotSet),
    };

    // Validation gate: a bad period never reaches aggregation.
    let period = match Period::parse(&args.from, &args.to, config.max_period_days()) {
        Ok(period) => period,
        Err(e) => anyhow::bail!("❌ {}", e),
    };
    msg_info!(Message::PeriodValid(period.days()));

    let mut employees_db = Employees::new()?;
    let employee_filter = if Managers::new()?.is_manager(&identity)? {
        if let Some(id) = args.employee {
            match employees_db.fetch(id)? {
                Some(e) if e.active => Some(id),
                _ => msg_bail_anyhow!(Message::EmployeeNotFoundWithId(id)),
            }
        } else {
            None
        }
    } else {
        // Non-managers always get a personal report.
        if args.employee.is_some() {
            msg_warning!(Message::ManagerOnlyReports);
        }
        match employees_db.fetch_by_contact(&identity)? {
            Some(employee) => Some(employee.id),
            None => msg_bail_anyhow!(Message::IdentityNotLinked),
        }
    };

    msg_info!(Message::GeneratingReport);

    let mut entries_db = TimeEntries::new()?;
    let entries = entries_db.fetch_all()?;
    let employees = employees_db.fetch_all()?;
    let aggregate = aggregate::aggregate(&entries, &employees, Some(period), employee_filter);

    if aggregate.is_empty() {
        msg_warning!(Message::NoDataInPeriodAdvisory);
        let dates = entries_db.available_dates()?;
        if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
            msg_info!(Message::AvailableDataHint(period::format_date(*first), period::format_date(*last)));
        }
    }

    let buffer = render::render(&aggregate, Some(period))?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("report_{}_{}.xlsx", args.from, args.to)));
    fs::write(&output, buffer)?;

    msg_success!(Message::ReportSaved(output.display().to_string()));
    Ok(())
}
