//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_day_end, parse_day_start, KindArg};
use crate::display::format_ledger_entries;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, CategoryKind, User};
use crate::services::{CategoryService, LedgerFilter, LedgerService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Amount (e.g., "42.50"); the category decides income vs. expense
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Disambiguate when an income and an expense category share a name
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD); defaults to now
        #[arg(long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Keep transactions on or after this date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
        /// Keep transactions on or before this date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,
        /// Disambiguate the category name
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },
}

/// Resolve a category name, requiring `--kind` when the name exists as both
/// an income and an expense category
fn resolve_category(
    storage: &Storage,
    user: &User,
    name: &str,
    kind: Option<KindArg>,
) -> FintrackResult<Category> {
    let service = CategoryService::new(storage);

    if let Some(kind) = kind {
        return service
            .find_category(user.id, name, kind.into())?
            .ok_or_else(|| FintrackError::invalid_category(name));
    }

    let income = service.find_category(user.id, name, CategoryKind::Income)?;
    let expense = service.find_category(user.id, name, CategoryKind::Expense)?;

    match (income, expense) {
        (Some(category), None) | (None, Some(category)) => Ok(category),
        (Some(_), Some(_)) => Err(FintrackError::Validation(format!(
            "'{}' exists as both an income and an expense category; pass --kind",
            name
        ))),
        (None, None) => Err(FintrackError::invalid_category(name)),
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    user: &User,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category = resolve_category(storage, user, &category, kind)?;
            let date = date.as_deref().map(parse_day_start).transpose()?;

            let entry = service.add_transaction(
                user.id,
                amount,
                description.as_deref().unwrap_or(""),
                category.id,
                date,
            )?;

            let direction = if entry.is_income() { "income" } else { "expense" };
            println!(
                "Recorded {} of {} in {} on {}",
                direction,
                entry.amount,
                entry.category_name,
                entry.date.format("%Y-%m-%d")
            );
        }

        TransactionCommands::List {
            start,
            end,
            category,
            kind,
        } => {
            let mut filter = LedgerFilter::new();
            if let Some(s) = start.as_deref() {
                filter = filter.start(parse_day_start(s)?);
            }
            if let Some(e) = end.as_deref() {
                filter = filter.end(parse_day_end(e)?);
            }
            if let Some(name) = category.as_deref() {
                filter = filter.category(resolve_category(storage, user, name, kind)?.id);
            }

            let entries = service.get_transactions(user.id, filter)?;
            print!("{}", format_ledger_entries(&entries));
        }
    }

    Ok(())
}
