//! fintrack - personal finance tracker
//!
//! This library provides the core functionality for the fintrack
//! application: a per-user ledger of categorized income and expense
//! transactions, monthly and yearly summaries over it, and savings goals
//! with explicit progress tracking.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, categories, transactions, goals)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly and yearly summary aggregation
//! - `cli`: Command handlers for the `fintrack` binary
//! - `display`: Plain-text formatting for terminal output
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::paths::FintrackPaths;
//! use fintrack::storage::Storage;
//! use fintrack::services::UserService;
//!
//! let paths = FintrackPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let user = UserService::new(&storage).register("alice")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
