//! Configuration management for the tabel application.
//!
//! Settings are stored as JSON in the platform data directory resolved by
//! [`DataStorage`](super::data_storage::DataStorage). Two things are
//! configurable:
//!
//! - **identity**: the contact id of the person running the CLI, matched
//!   against employee/manager records the way the original system matched
//!   chat identities;
//! - **report limits**: the maximum reporting period span.
//!
//! `Config::read` falls back to defaults when no file exists, so the
//! application runs with zero setup; `Config::init` is the interactive
//! wizard behind `tabel init`.

use super::data_storage::DataStorage;
use crate::libs::period::DEFAULT_MAX_PERIOD_DAYS;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Report generation limits.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Maximum allowed span of a reporting period, in days.
    ///
    /// Bounds the work a single report request can demand; periods longer
    /// than this are rejected during validation.
    pub max_period_days: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            max_period_days: DEFAULT_MAX_PERIOD_DAYS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Contact id identifying the person running the CLI.
    ///
    /// Matched against employee and manager records to resolve who an
    /// entry or a report belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    /// Report generation limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Loads the configuration, or defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty JSON to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(config_file_path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Starts from the current configuration so re-running keeps existing
    /// values as defaults.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let identity: String = Input::with_theme(&theme)
            .with_prompt("Your contact id")
            .with_initial_text(current.identity.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let max_period_days: i64 = Input::with_theme(&theme)
            .with_prompt("Maximum report period in days")
            .default(current.report.clone().unwrap_or_default().max_period_days)
            .interact_text()?;

        Ok(Config {
            identity: (!identity.is_empty()).then_some(identity),
            report: Some(ReportConfig { max_period_days }),
        })
    }

    /// Effective maximum period span, whether or not limits were configured.
    pub fn max_period_days(&self) -> i64 {
        self.report.as_ref().map(|r| r.max_period_days).unwrap_or(DEFAULT_MAX_PERIOD_DAYS)
    }
}
