//! Recording worked hours for a date and shift.
//!
//! The three inputs (date, hours, shift) can come from flags or be
//! collected interactively. Either way they accumulate in a per-identity
//! [`SessionContext`](crate::libs::session::SessionContext) created on
//! first interaction and cleared once the entry is stored, so no
//! half-entered state leaks between runs.

use crate::{
    db::{
        employees::Employees,
        time_entries::{TimeEntries, UpsertOutcome},
    },
    libs::{
        config::Config,
        entry::ShiftType,
        messages::Message,
        period::{self, PeriodError},
        session::Sessions,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct TimeArgs {
    /// Date of the worked shift, DD.MM.YYYY
    #[arg(long)]
    date: Option<String>,
    /// Worked hours, greater than 0 and at most 24
    #[arg(long)]
    hours: Option<f64>,
    /// Shift type
    #[arg(long, value_enum)]
    shift: Option<ShiftType>,
}

pub fn cmd(args: TimeArgs) -> Result<()> {
    let config = Config::read()?;
    let identity = match config.identity {
        Some(identity) => identity,
        None => msg_bail_anyhow!(Message::IdentityNotSet),
    };
    let employee = match Employees::new()?.fetch_by_contact(&identity)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::IdentityNotLinked),
    };

    let mut sessions = Sessions::new();
    let context = sessions.begin(&identity);

    if let Some(date) = args.date.as_deref() {
        match period::parse_date(date) {
            Some(date) => context.set_date(date),
            None => anyhow::bail!("❌ {}", PeriodError::InvalidFormat),
        }
    }
    if let Some(hours) = args.hours {
        if !hours_in_range(hours) {
            msg_bail_anyhow!(Message::HoursOutOfRange);
        }
        context.set_hours(hours);
    }
    if let Some(shift) = args.shift {
        context.set_shift(shift);
    }

    let theme = ColorfulTheme::default();

    if context.draft.date.is_none() {
        let input: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptEntryDate.to_string())
            .validate_with(|s: &String| match period::parse_date(s) {
                Some(_) => Ok(()),
                None => Err("Invalid date format. Use DD.MM.YYYY"),
            })
            .interact_text()?;
        match period::parse_date(&input) {
            Some(date) => context.set_date(date),
            None => anyhow::bail!("❌ {}", PeriodError::InvalidFormat),
        }
    }
    if context.draft.hours.is_none() {
        let hours: f64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptEntryHours.to_string())
            .validate_with(|h: &f64| {
                if hours_in_range(*h) {
                    Ok(())
                } else {
                    Err("Hours must be greater than 0 and at most 24")
                }
            })
            .interact_text()?;
        context.set_hours(hours);
    }
    if context.draft.shift.is_none() {
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::PromptShiftType.to_string())
            .items(&["day", "night"])
            .default(0)
            .interact()?;
        context.set_shift(if selection == 0 { ShiftType::Day } else { ShiftType::Night });
    }

    let (date, hours, shift) = match context.finish() {
        Some(entry) => entry,
        None => anyhow::bail!("time entry is incomplete"),
    };
    sessions.clear(&identity);

    let outcome = TimeEntries::new()?.upsert(employee.id, date, shift, hours)?;
    match outcome {
        UpsertOutcome::Inserted => msg_success!(Message::EntryAdded {
            date: period::format_date(date),
            hours,
            shift: shift.as_str().to_string(),
        }),
        UpsertOutcome::Updated => msg_success!(Message::EntryUpdated {
            date: period::format_date(date),
            hours,
            shift: shift.as_str().to_string(),
        }),
    }

    Ok(())
}

fn hours_in_range(hours: f64) -> bool {
    hours > 0.0 && hours <= 24.0
}
