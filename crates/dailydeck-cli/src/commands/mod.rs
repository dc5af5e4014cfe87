//! Subcommand implementations.
//!
//! Each command loads the dashboard, performs one operation and prints the
//! result. Errors bubble up to `main`.

pub mod config;
pub mod habit;
pub mod note;
pub mod sidebar;
pub mod theme;
pub mod todo;

use chrono::NaiveDate;
use dailydeck_core::{Config, Dashboard, DashboardSettings, SqliteKv};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the dashboard backed by the configured SQLite file.
pub fn open_dashboard(config: &Config) -> Result<Dashboard<SqliteKv>, Box<dyn std::error::Error>> {
    let path = config.database_path()?;
    let store = SqliteKv::open(&path)?;
    Ok(Dashboard::load_with(store, DashboardSettings::from(config))?)
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}': {e}"))
}

/// The local calendar day, unless overridden.
pub fn today_or(overridden: Option<NaiveDate>) -> NaiveDate {
    overridden.unwrap_or_else(|| chrono::Local::now().date_naive())
}
