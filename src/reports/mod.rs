//! Report generation for fintrack
//!
//! Derived aggregates over the ledger. Reports return plain data; rendering
//! belongs to the presentation layer.

pub mod summary;

pub use summary::{summarize_period, MonthlySummary, YearlySummary};
