//! Spreadsheet rendering of aggregated work hours.
//!
//! The renderer is a pure function from an [`Aggregate`] to an xlsx byte
//! stream. It is split in two stages so the cell layout stays testable
//! without unzipping workbooks:
//!
//! 1. [`build_sections`] turns the aggregate into a per-employee row model
//!    where every display decision (placeholder vs. value, anomaly note,
//!    dash totals) is already made;
//! 2. [`render`] writes that model into a single-sheet workbook and
//!    serializes it to a buffer.
//!
//! ## Layout Contract
//!
//! - Merged, bold, centered title row, suffixed with the period when given
//! - Header row: employee, date, day hours, night hours, daily total, note
//! - Per employee: a bold name row, one row per date in ascending order,
//!   then a bold totals row; `"-"` marks a zero shift on a day with data
//!   and everything on a day without data
//! - Totals render `"-"` (never `0`) for employees with no data at all
//! - Fixed centered italic muted attribution footer
//! - Fixed column widths, not content-sensitive

use crate::libs::aggregate::Aggregate;
use crate::libs::period::{self, Period};
use anyhow::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

/// Marker rendered for absent hours and empty totals.
pub const PLACEHOLDER: &str = "-";

/// Note attached to a day whose combined hours exceed the daily limit.
pub const OVER_LIMIT_NOTE: &str = "Exceeds 24 hours";

const REPORT_TITLE: &str = "Work time report";
const TOTALS_LABEL: &str = "TOTAL:";
const FOOTER: &str = "Generated by tabel";

const HEADERS: [&str; 6] = ["Employee", "Date", "Day hours", "Night hours", "Daily total", "Note"];
const COLUMN_WIDTHS: [f64; 6] = [25.0, 15.0, 15.0, 15.0, 15.0, 20.0];

/// One rendered date row. `None` hour values render as the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub date: String,
    pub day: Option<f64>,
    pub night: Option<f64>,
    pub total: Option<f64>,
    pub over_limit: bool,
}

/// Row model for one employee: date rows plus the totals computed over
/// days that carry data. Built fresh per report request, never persisted.
#[derive(Debug, Clone)]
pub struct EmployeeSection {
    pub name: String,
    pub rows: Vec<DayRow>,
    pub total_day: f64,
    pub total_night: f64,
    pub days_with_data: usize,
}

impl EmployeeSection {
    pub fn grand_total(&self) -> f64 {
        self.total_day + self.total_night
    }

    /// Totals render as placeholders when the employee has no data at all.
    pub fn has_data(&self) -> bool {
        self.days_with_data > 0
    }
}

/// Builds the display row model from aggregated data.
///
/// All branching lives here: which cells show the placeholder, which days
/// count toward totals, and which days get the over-limit note. The xlsx
/// writer below only transcribes the result.
pub fn build_sections(aggregate: &Aggregate) -> Vec<EmployeeSection> {
    aggregate
        .employees
        .iter()
        .map(|employee| {
            let mut total_day = 0.0;
            let mut total_night = 0.0;
            let mut days_with_data = 0;

            let rows = employee
                .days
                .iter()
                .map(|(date, hours)| {
                    if hours.has_data() {
                        total_day += hours.day;
                        total_night += hours.night;
                        days_with_data += 1;
                    }
                    DayRow {
                        date: period::format_date(*date),
                        day: (hours.day != 0.0).then_some(hours.day),
                        night: (hours.night != 0.0).then_some(hours.night),
                        total: hours.has_data().then(|| hours.total()),
                        over_limit: hours.exceeds_limit(),
                    }
                })
                .collect();

            EmployeeSection {
                name: employee.name.clone(),
                rows,
                total_day,
                total_night,
                days_with_data,
            }
        })
        .collect()
}

/// Renders the aggregate into a single-sheet xlsx document in memory.
pub fn render(aggregate: &Aggregate, period: Option<Period>) -> Result<Vec<u8>> {
    let sections = build_sections(aggregate);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Work time report")?;

    let title_format = Format::new().set_bold().set_font_size(14.0).set_align(FormatAlign::Center);
    let bold = Format::new().set_bold();
    let footer_format = Format::new().set_italic().set_font_color(Color::Gray).set_align(FormatAlign::Center);

    let title = match period {
        Some(p) => format!(
            "{} for period {} to {}",
            REPORT_TITLE,
            period::format_date(p.start),
            period::format_date(p.end)
        ),
        None => REPORT_TITLE.to_string(),
    };
    worksheet.merge_range(0, 0, 0, 5, &title, &title_format)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(2, col as u16, *header, &bold)?;
    }

    let mut row: u32 = 3;
    for section in &sections {
        worksheet.write_string_with_format(row, 0, &section.name, &bold)?;
        row += 1;

        for day_row in &section.rows {
            worksheet.write_string(row, 1, &day_row.date)?;
            write_hours(worksheet, row, 2, day_row.day, None)?;
            write_hours(worksheet, row, 3, day_row.night, None)?;
            write_hours(worksheet, row, 4, day_row.total, None)?;
            if day_row.over_limit {
                worksheet.write_string(row, 5, OVER_LIMIT_NOTE)?;
            }
            row += 1;
        }

        worksheet.write_string_with_format(row, 1, TOTALS_LABEL, &bold)?;
        if section.has_data() {
            write_hours(worksheet, row, 2, Some(section.total_day), Some(&bold))?;
            write_hours(worksheet, row, 3, Some(section.total_night), Some(&bold))?;
            write_hours(worksheet, row, 4, Some(section.grand_total()), Some(&bold))?;
        } else {
            write_hours(worksheet, row, 2, None, Some(&bold))?;
            write_hours(worksheet, row, 3, None, Some(&bold))?;
            write_hours(worksheet, row, 4, None, Some(&bold))?;
        }
        row += 2;
    }

    row += 1;
    worksheet.merge_range(row, 0, row, 5, FOOTER, &footer_format)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Writes an hour cell: a number when present, the placeholder otherwise.
fn write_hours(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
    format: Option<&Format>,
) -> Result<()> {
    match (value, format) {
        (Some(v), Some(f)) => worksheet.write_number_with_format(row, col, v, f)?,
        (Some(v), None) => worksheet.write_number(row, col, v)?,
        (None, Some(f)) => worksheet.write_string_with_format(row, col, PLACEHOLDER, f)?,
        (None, None) => worksheet.write_string(row, col, PLACEHOLDER)?,
    };
    Ok(())
}
