//! Raw time-entry export for backup and external analysis.
//!
//! Exports dump the stored entries joined with employee names, one record
//! per row. Three formats are supported: CSV for universal compatibility,
//! JSON for programmatic processing, and Excel for spreadsheet users. This
//! is a plain dump; the formatted report lives in [`super::render`].

use crate::db::employees::Employee;
use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

/// One exported record: a stored entry with the employee name resolved.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRecord {
    pub employee: String,
    pub date: String,
    pub hours: f64,
    pub shift: String,
    pub recorded_at: String,
}

/// Export handler carrying the format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without a custom path the file name is derived
    /// from the current timestamp and the format extension.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("tabel_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes all entries in the configured format.
    pub fn export(&self, entries: &[TimeEntry], employees: &[Employee]) -> Result<()> {
        let names: HashMap<i64, &str> = employees.iter().map(|e| (e.id, e.full_name.as_str())).collect();

        let records: Vec<ExportRecord> = entries
            .iter()
            .map(|e| ExportRecord {
                employee: names.get(&e.employee_id).copied().unwrap_or("(unknown)").to_string(),
                date: e.date.clone(),
                hours: e.hours,
                shift: e.shift.as_str().to_string(),
                recorded_at: e.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            })
            .collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&records)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&records)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_excel(&records)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, records: &[ExportRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Employee", "Date", "Hours", "Shift", "Recorded at"])?;

        for record in records {
            wtr.write_record(&[
                record.employee.clone(),
                record.date.clone(),
                record.hours.to_string(),
                record.shift.clone(),
                record.recorded_at.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, records: &[ExportRecord]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Employee", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Hours", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Shift", &header_format)?;
        worksheet.write_string_with_format(0, 4, "Recorded at", &header_format)?;

        for (i, record) in records.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &record.employee)?;
            worksheet.write_string(row, 1, &record.date)?;
            worksheet.write_number(row, 2, record.hours)?;
            worksheet.write_string(row, 3, &record.shift)?;
            worksheet.write_string(row, 4, &record.recorded_at)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
