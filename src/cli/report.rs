//! Report CLI commands

use chrono::{Datelike, Utc};
use clap::Subcommand;

use crate::display::{format_monthly_summary, format_yearly_summary};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{MonthPeriod, User};
use crate::reports::{MonthlySummary, YearlySummary};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly income/expense summary with category breakdown
    Month {
        /// Period to report on (e.g., "2024-03"); defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Yearly summary with month-by-month totals
    Year {
        /// Year to report on; defaults to the current year
        year: Option<i32>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    user: &User,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Month { period } => {
            let period = match period.as_deref() {
                Some(s) => MonthPeriod::parse(s)
                    .map_err(|e| FintrackError::Validation(e.to_string()))?,
                None => MonthPeriod::current(),
            };

            let summary =
                MonthlySummary::generate(storage, user.id, period.year(), period.month())?;
            print!("{}", format_monthly_summary(&summary));
        }

        ReportCommands::Year { year } => {
            let year = year.unwrap_or_else(|| Utc::now().year());
            let summary = YearlySummary::generate(storage, user.id, year)?;
            print!("{}", format_yearly_summary(&summary));
        }
    }

    Ok(())
}
