//! Listing your own recent entries.
//!
//! Shows the per-day breakdown for the calling identity over the last N
//! days (90 by default), followed by totals over the days that carry
//! data. Uses the same aggregator as report generation, so the numbers
//! here always match the spreadsheet.

use crate::{
    db::{employees::Employees, time_entries::TimeEntries},
    libs::{aggregate, config::Config, messages::Message, period::Period, view::View},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct EntriesArgs {
    /// How many days back to list
    #[arg(long, default_value_t = 90)]
    days: i64,
}

pub fn cmd(args: EntriesArgs) -> Result<()> {
    let config = Config::read()?;
    let identity = match config.identity {
        Some(identity) => identity,
        None => msg_bail_anyhow!(Message::IdentityNotSet),
    };
    let mut employees = Employees::new()?;
    let employee = match employees.fetch_by_contact(&identity)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::IdentityNotLinked),
    };

    let end = Local::now().date_naive();
    let period = Period {
        start: end - Duration::days(args.days),
        end,
    };

    let entries = TimeEntries::new()?.fetch_all()?;
    let all_employees = employees.fetch_all()?;
    let aggregate = aggregate::aggregate(&entries, &all_employees, Some(period), Some(employee.id));

    let hours = match aggregate.find(&employee.full_name) {
        Some(hours) if hours.days_with_data() > 0 => hours,
        _ => {
            msg_info!(Message::NoEntriesInPeriod(args.days));
            return Ok(());
        }
    };

    msg_print!(Message::EntriesHeader(args.days), true);
    View::entry_days(hours)?;

    let (day, night) = hours
        .days
        .values()
        .filter(|d| d.has_data())
        .fold((0.0, 0.0), |(day, night), d| (day + d.day, night + d.night));
    msg_print!(
        Message::EntriesTotals {
            days: hours.days_with_data(),
            day,
            night,
        },
        true
    );

    Ok(())
}
