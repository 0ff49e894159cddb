//! Category display formatting

use crate::models::{Category, CategoryKind};

/// Format categories as two sections, income first
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'fintrack user add <name>' to create a user with the default set.".to_string();
    }

    let mut output = String::new();

    for (header, kind) in [("Income", CategoryKind::Income), ("Expenses", CategoryKind::Expense)] {
        let section: Vec<&Category> = categories.iter().filter(|c| c.kind == kind).collect();
        if section.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", header));
        for (i, category) in section.iter().enumerate() {
            let prefix = if i == section.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(&format!("  {}{}\n", prefix, category.name));
        }
    }

    output
}
