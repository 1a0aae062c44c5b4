pub mod employee;
pub mod entries;
pub mod export;
pub mod init;
pub mod manager;
pub mod report;
pub mod time;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage employee records")]
    Employee(employee::EmployeeArgs),
    #[command(about = "Manage manager identities")]
    Manager(manager::ManagerArgs),
    #[command(about = "Record worked hours for a date and shift")]
    Time(time::TimeArgs),
    #[command(about = "Show your entries for recent days")]
    Entries(entries::EntriesArgs),
    #[command(about = "Generate a work time report for a period")]
    Report(report::ReportArgs),
    #[command(about = "Export raw time entries")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Manager(args) => manager::cmd(args),
            Commands::Time(args) => time::cmd(args),
            Commands::Entries(args) => entries::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Installs the tracing subscriber when debug mode is requested.
///
/// In normal mode the message macros print directly and no subscriber is
/// needed; installing one anyway would duplicate output.
fn init_tracing() {
    if std::env::var("TABEL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
