//! Terminal output formatting
//!
//! Pure formatting helpers used by the CLI handlers; everything returns a
//! String so it can be tested without capturing stdout.

pub mod category;
pub mod goal;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use goal::format_goal_list;
pub use report::{format_monthly_summary, format_yearly_summary};
pub use transaction::format_ledger_entries;
