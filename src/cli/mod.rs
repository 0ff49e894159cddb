//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. This is the
//! presentation collaborator: handlers resolve names to ids, call one
//! service operation, and print plain text.

pub mod category;
pub mod goal;
pub mod report;
pub mod transaction;
pub mod user;

pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{CategoryKind, Money, User};
use crate::services::UserService;
use crate::storage::Storage;

/// Income/expense selector for command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for CategoryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => CategoryKind::Income,
            KindArg::Expense => CategoryKind::Expense,
        }
    }
}

/// Resolve the acting user from `--user` or the configured default
pub fn resolve_user(
    storage: &Storage,
    settings: &Settings,
    flag: Option<&str>,
) -> FintrackResult<User> {
    let username = flag
        .map(str::to_string)
        .or_else(|| settings.default_user.clone())
        .ok_or_else(|| {
            FintrackError::Config(
                "No user given; pass --user or set default_user in config.json".into(),
            )
        })?;

    UserService::new(storage)
        .find_user(&username)?
        .ok_or_else(|| FintrackError::user_not_found(username))
}

/// Parse a `YYYY-MM-DD` argument as the start of that day (UTC)
pub(crate) fn parse_day_start(s: &str) -> FintrackResult<DateTime<Utc>> {
    let date = parse_naive_date(s)?;
    Ok(date.and_hms_opt(0, 0, 0).expect("valid time").and_utc())
}

/// Parse a `YYYY-MM-DD` argument as the end of that day (inclusive bound)
pub(crate) fn parse_day_end(s: &str) -> FintrackResult<DateTime<Utc>> {
    let date = parse_naive_date(s)?;
    Ok(date.and_hms_opt(23, 59, 59).expect("valid time").and_utc())
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_naive_date(s: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FintrackError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

/// Parse a money argument
pub(crate) fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| FintrackError::Validation(e.to_string()))
}
