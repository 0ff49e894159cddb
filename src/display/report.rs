//! Report display formatting

use crate::reports::{MonthlySummary, YearlySummary};

/// Format a monthly summary with its category breakdown
pub fn format_monthly_summary(summary: &MonthlySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n\n", summary.period));
    output.push_str(&format!("  Income:   {}\n", summary.total_income));
    output.push_str(&format!("  Expenses: {}\n", summary.total_expenses));
    output.push_str(&format!("  Net:      {}\n", summary.net));

    if !summary.category_breakdown.is_empty() {
        output.push_str("\nBy category:\n");
        for (name, amount) in &summary.category_breakdown {
            output.push_str(&format!("  {:<20} {:>12}\n", name, amount.to_string()));
        }
    }

    output
}

/// Format a yearly summary as a month-by-month table plus totals
pub fn format_yearly_summary(summary: &YearlySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n\n", summary.year));
    output.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12}\n",
        "Month", "Income", "Expenses", "Net"
    ));

    for month in &summary.months {
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            month.period.to_string(),
            month.total_income.to_string(),
            month.total_expenses.to_string(),
            month.net.to_string()
        ));
    }

    output.push_str(&format!(
        "\n{:<10} {:>12} {:>12} {:>12}\n",
        "Total",
        summary.total_income.to_string(),
        summary.total_expenses.to_string(),
        summary.net.to_string()
    ));
    output
}
