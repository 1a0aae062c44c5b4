//! Raw data export in CSV, JSON, and Excel formats.

use crate::{
    db::{employees::Employees, time_entries::TimeEntries},
    libs::export::{ExportFormat, Exporter},
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path; defaults to a timestamped name
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let entries = TimeEntries::new()?.fetch_all()?;
    let employees = Employees::new()?.fetch_all()?;

    Exporter::new(args.format, args.output).export(&entries, &employees)
}
