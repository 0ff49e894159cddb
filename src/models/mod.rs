//! Core data models for fintrack
//!
//! This module contains the data structures that represent the ledger
//! domain: users, categories, transactions, savings goals, and the value
//! types (money, ids, periods) they are built from.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use category::{default_categories, Category, CategoryKind};
pub use goal::Goal;
pub use ids::{CategoryId, GoalId, TransactionId, UserId};
pub use money::Money;
pub use period::MonthPeriod;
pub use transaction::Transaction;
pub use user::User;
