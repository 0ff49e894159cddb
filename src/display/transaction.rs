//! Transaction display formatting

use crate::models::CategoryKind;
use crate::services::LedgerEntry;

/// Format ledger entries as an aligned table, newest first
pub fn format_ledger_entries(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:>12}  {:<20} {}\n",
        "Date", "Amount", "Category", "Description"
    ));

    for entry in entries {
        let signed = match entry.category_kind {
            CategoryKind::Income => format!("+{}", entry.amount),
            CategoryKind::Expense => format!("-{}", entry.amount),
        };
        output.push_str(&format!(
            "{:<12} {:>12}  {:<20} {}\n",
            entry.date.format("%Y-%m-%d"),
            signed,
            entry.category_name,
            entry.description
        ));
    }

    output.push_str(&format!("\n{} transaction(s)\n", entries.len()));
    output
}
