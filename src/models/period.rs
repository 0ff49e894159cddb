//! Reporting period representation
//!
//! Summaries are computed over calendar months. A period's bounds are
//! inclusive: from the first of the month at 00:00:00 to the last day at
//! 23:59:59, with the last day following the calendar's days-in-month rule
//! (leap years included).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month used as a reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a period, validating the year and month
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=9999).contains(&year) {
            return Err(PeriodError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period covering the current month (UTC)
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Year and month are range-checked at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid date")
    }

    /// Last day of the month, leap-year correct
    pub fn last_day(&self) -> NaiveDate {
        let next_month_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month_first.expect("valid date") - Duration::days(1)
    }

    /// Inclusive lower bound of the period
    pub fn start(&self) -> DateTime<Utc> {
        self.first_day()
            .and_hms_opt(0, 0, 0)
            .expect("valid time")
            .and_utc()
    }

    /// Inclusive upper bound of the period
    pub fn end(&self) -> DateTime<Utc> {
        self.last_day()
            .and_hms_opt(23, 59, 59)
            .expect("valid time")
            .and_utc()
    }

    /// Check if a timestamp falls within this period
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start() && ts <= self.end()
    }

    /// Parse a period string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodError> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| PeriodError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for period construction and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    InvalidFormat(String),
    InvalidYear(i32),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodError::InvalidYear(y) => write!(f, "Invalid year: {}", y),
            PeriodError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodError {}
