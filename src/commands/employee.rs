//! Employee management commands.
//!
//! Employees are the subjects hours are recorded for. Removal is a soft
//! deactivation so recorded history survives; `claim` links the configured
//! identity to an employee record, which is how `time`, `entries`, and
//! personal reports resolve who is asking.

use crate::{
    db::employees::Employees,
    libs::{config::Config, messages::Message, view::View},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// Add a new employee, active by default
    Add { full_name: String },
    /// Deactivate an employee (history is kept)
    Remove { id: i64 },
    /// List employees
    List {
        /// Include deactivated employees
        #[arg(long)]
        all: bool,
    },
    /// Link your configured identity to an employee record
    Claim { id: i64 },
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    let mut employees = Employees::new()?;

    match args.command {
        EmployeeCommand::Add { full_name } => {
            employees.insert(&full_name)?;
            msg_success!(Message::EmployeeAdded(full_name));
        }
        EmployeeCommand::Remove { id } => {
            let employee = match employees.fetch(id)? {
                Some(e) if e.active => e,
                _ => msg_bail_anyhow!(Message::EmployeeNotFoundWithId(id)),
            };
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Deactivate '{}'?", employee.full_name))
                .default(false)
                .interact()?;
            if confirmed {
                employees.deactivate(id)?;
                msg_success!(Message::EmployeeDeactivated(employee.full_name));
            }
        }
        EmployeeCommand::List { all } => {
            let list = if all { employees.fetch_all()? } else { employees.fetch_active()? };
            if list.is_empty() {
                msg_bail_anyhow!(Message::NoActiveEmployees);
            }
            View::employees(&list)?;
        }
        EmployeeCommand::Claim { id } => {
            let config = Config::read()?;
            let identity = match config.identity {
                Some(identity) => identity,
                None => msg_bail_anyhow!(Message::IdentityNotSet),
            };
            let employee = match employees.fetch(id)? {
                Some(e) if e.active => e,
                _ => msg_bail_anyhow!(Message::EmployeeNotFoundWithId(id)),
            };
            employees.assign_contact(id, &identity)?;
            msg_success!(Message::EmployeeClaimed(employee.full_name));
        }
    }

    Ok(())
}
