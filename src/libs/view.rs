use super::render::PLACEHOLDER;
use crate::db::employees::Employee;
use crate::db::managers::Manager;
use crate::libs::aggregate::EmployeeHours;
use crate::libs::period;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn employees(employees: &Vec<Employee>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "FULL NAME", "CONTACT", "ACTIVE"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.full_name,
                employee.contact_id.as_deref().unwrap_or(PLACEHOLDER),
                if employee.active { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn managers(managers: &Vec<Manager>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CONTACT", "FULL NAME"]);
        for manager in managers {
            table.add_row(row![manager.contact_id, manager.full_name]);
        }
        table.printstd();

        Ok(())
    }

    /// Per-day listing for one employee, days without data skipped.
    pub fn entry_days(employee: &EmployeeHours) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "NIGHT", "TOTAL"]);
        for (date, hours) in employee.days.iter().filter(|(_, h)| h.has_data()) {
            table.add_row(row![
                period::format_date(*date),
                display_hours(hours.day),
                display_hours(hours.night),
                hours.total()
            ]);
        }
        table.printstd();

        Ok(())
    }
}

fn display_hours(hours: f64) -> String {
    if hours == 0.0 {
        PLACEHOLDER.to_string()
    } else {
        hours.to_string()
    }
}
