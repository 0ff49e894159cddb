//! Monthly and yearly ledger summaries
//!
//! The aggregation itself is a pure function of the transactions, the
//! category set, and the period; the `generate` constructors only load that
//! data from storage. Empty periods produce all-zero summaries, never
//! errors.

use std::collections::{BTreeMap, HashMap};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, CategoryId, Money, MonthPeriod, Transaction, UserId};
use crate::storage::Storage;

/// Income, expenses, net, and per-category totals for one calendar month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub total_income: Money,
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub net: Money,
    /// Summed amounts per category name, across both kinds. An income and
    /// an expense category sharing a name merge into one entry; see the
    /// test suite, where this inherited sharp edge is pinned.
    pub category_breakdown: BTreeMap<String, Money>,
}

impl MonthlySummary {
    /// Compute the summary for one user and month
    pub fn generate(
        storage: &Storage,
        user_id: UserId,
        year: i32,
        month: u32,
    ) -> FintrackResult<Self> {
        let period = MonthPeriod::new(year, month)
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        let categories = category_index(storage, user_id)?;
        let transactions = storage.transactions.get_by_user(user_id)?;

        let summary = summarize_period(&transactions, &categories, period);
        log::debug!(
            "monthly summary {}: income={}, expenses={}",
            period,
            summary.total_income,
            summary.total_expenses
        );
        Ok(summary)
    }
}

/// Twelve monthly summaries plus the yearly totals
#[derive(Debug, Clone)]
pub struct YearlySummary {
    pub year: i32,
    /// One entry per month, January first
    pub months: Vec<MonthlySummary>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net: Money,
}

impl YearlySummary {
    /// Compute the summary for one user and year
    pub fn generate(storage: &Storage, user_id: UserId, year: i32) -> FintrackResult<Self> {
        let categories = category_index(storage, user_id)?;
        let transactions = storage.transactions.get_by_user(user_id)?;

        let mut months = Vec::with_capacity(12);
        for month in 1..=12 {
            let period = MonthPeriod::new(year, month)
                .map_err(|e| FintrackError::Validation(e.to_string()))?;
            months.push(summarize_period(&transactions, &categories, period));
        }

        let total_income: Money = months.iter().map(|m| m.total_income).sum();
        let total_expenses: Money = months.iter().map(|m| m.total_expenses).sum();

        Ok(Self {
            year,
            months,
            total_income,
            total_expenses,
            net: total_income - total_expenses,
        })
    }
}

/// Index a user's categories by id for aggregation joins
fn category_index(
    storage: &Storage,
    user_id: UserId,
) -> FintrackResult<HashMap<CategoryId, Category>> {
    Ok(storage
        .categories
        .list_by_user(user_id, None)?
        .into_iter()
        .map(|c| (c.id, c))
        .collect())
}

/// Aggregate the transactions falling inside `period`
///
/// Pure with respect to its inputs: direction is joined through the
/// category's kind, amounts are magnitudes, and the breakdown is keyed by
/// category name.
pub fn summarize_period(
    transactions: &[Transaction],
    categories: &HashMap<CategoryId, Category>,
    period: MonthPeriod,
) -> MonthlySummary {
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();
    let mut category_breakdown: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| period.contains(t.date)) {
        let Some(category) = categories.get(&txn.category_id) else {
            log::warn!("transaction {} references a missing category", txn.id);
            continue;
        };

        if category.kind.is_income() {
            total_income += txn.amount;
        } else {
            total_expenses += txn.amount;
        }

        *category_breakdown
            .entry(category.name.clone())
            .or_insert_with(Money::zero) += txn.amount;
    }

    MonthlySummary {
        period,
        total_income,
        total_expenses,
        net: total_income - total_expenses,
        category_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::CategoryKind;
    use crate::services::{CategoryService, LedgerService};
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (dir, storage)
    }

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    /// Categories and a pair of March 2024 transactions: Salary $1000.00 on
    /// the 5th, Food $200.00 on the 10th
    fn seed_march_scenario(storage: &Storage, user_id: UserId) {
        let categories = CategoryService::new(storage);
        let salary = categories
            .add_category(user_id, "Salary", CategoryKind::Income)
            .unwrap();
        let food = categories
            .add_category(user_id, "Food", CategoryKind::Expense)
            .unwrap();

        let ledger = LedgerService::new(storage);
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(100_000),
                "March pay",
                salary.id,
                Some(ts("2024-03-05T09:00:00Z")),
            )
            .unwrap();
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(20_000),
                "groceries",
                food.id,
                Some(ts("2024-03-10T18:30:00Z")),
            )
            .unwrap();
    }

    #[test]
    fn test_monthly_summary_scenario() {
        let (_dir, storage) = create_test_storage();
        let user_id = UserId::new();
        seed_march_scenario(&storage, user_id);

        let summary = MonthlySummary::generate(&storage, user_id, 2024, 3).unwrap();

        assert_eq!(summary.total_income.cents(), 100_000);
        assert_eq!(summary.total_expenses.cents(), 20_000);
        assert_eq!(summary.net.cents(), 80_000);
        assert_eq!(summary.category_breakdown.len(), 2);
        assert_eq!(summary.category_breakdown["Salary"].cents(), 100_000);
        assert_eq!(summary.category_breakdown["Food"].cents(), 20_000);
    }

    #[test]
    fn test_empty_period_is_all_zeros() {
        let (_dir, storage) = create_test_storage();
        let user_id = UserId::new();
        seed_march_scenario(&storage, user_id);

        let summary = MonthlySummary::generate(&storage, user_id, 2024, 4).unwrap();
        assert!(summary.total_income.is_zero());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.net.is_zero());
        assert!(summary.category_breakdown.is_empty());
    }

    #[test]
    fn test_net_identity() {
        let (_dir, storage) = create_test_storage();
        let user_id = UserId::new();
        seed_march_scenario(&storage, user_id);

        let summary = MonthlySummary::generate(&storage, user_id, 2024, 3).unwrap();
        assert_eq!(summary.net, summary.total_income - summary.total_expenses);
    }

    #[test]
    fn test_period_bounds_are_inclusive() {
        let (_dir, storage) = create_test_storage();
        let user_id = UserId::new();
        let food = CategoryService::new(&storage)
            .add_category(user_id, "Food", CategoryKind::Expense)
            .unwrap();

        let ledger = LedgerService::new(&storage);
        // Exactly on the period's bounds
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(100),
                "",
                food.id,
                Some(ts("2024-02-01T00:00:00Z")),
            )
            .unwrap();
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(200),
                "",
                food.id,
                Some(ts("2024-02-29T23:59:59Z")),
            )
            .unwrap();
        // Just outside
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(400),
                "",
                food.id,
                Some(ts("2024-03-01T00:00:00Z")),
            )
            .unwrap();

        let feb = MonthlySummary::generate(&storage, user_id, 2024, 2).unwrap();
        assert_eq!(feb.total_expenses.cents(), 300);
    }

    #[test]
    fn test_same_name_income_and_expense_merge_in_breakdown() {
        // Inherited sharp edge: the breakdown is keyed by name only, so a
        // user with an income and an expense category both called "Gifts"
        // sees one merged entry. Totals still split correctly by kind.
        let (_dir, storage) = create_test_storage();
        let user_id = UserId::new();
        let categories = CategoryService::new(&storage);
        let gifts_in = categories
            .add_category(user_id, "Gifts", CategoryKind::Income)
            .unwrap();
        let gifts_out = categories
            .add_category(user_id, "Gifts", CategoryKind::Expense)
            .unwrap();

        let ledger = LedgerService::new(&storage);
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(5000),
                "",
                gifts_in.id,
                Some(ts("2024-03-01T12:00:00Z")),
            )
            .unwrap();
        ledger
            .add_transaction(
                user_id,
                Money::from_cents(3000),
                "",
                gifts_out.id,
                Some(ts("2024-03-02T12:00:00Z")),
            )
            .unwrap();

        let summary = MonthlySummary::generate(&storage, user_id, 2024, 3).unwrap();
        assert_eq!(summary.total_income.cents(), 5000);
        assert_eq!(summary.total_expenses.cents(), 3000);
        assert_eq!(summary.category_breakdown.len(), 1);
        assert_eq!(summary.category_breakdown["Gifts"].cents(), 8000);
    }

    #[test]
    fn test_yearly_summary_sums_months() {
        let (_dir, storage) = create_test_storage();
        let user_id = UserId::new();
        let categories = CategoryService::new(&storage);
        let salary = categories
            .add_category(user_id, "Salary", CategoryKind::Income)
            .unwrap();
        let food = categories
            .add_category(user_id, "Food", CategoryKind::Expense)
            .unwrap();

        let ledger = LedgerService::new(&storage);
        for month in ["01", "06", "12"] {
            ledger
                .add_transaction(
                    user_id,
                    Money::from_cents(100_000),
                    "",
                    salary.id,
                    Some(ts(&format!("2024-{month}-15T00:00:00Z"))),
                )
                .unwrap();
            ledger
                .add_transaction(
                    user_id,
                    Money::from_cents(40_000),
                    "",
                    food.id,
                    Some(ts(&format!("2024-{month}-20T00:00:00Z"))),
                )
                .unwrap();
        }

        let yearly = YearlySummary::generate(&storage, user_id, 2024).unwrap();

        assert_eq!(yearly.months.len(), 12);
        assert_eq!(yearly.total_income.cents(), 300_000);
        assert_eq!(yearly.total_expenses.cents(), 120_000);
        assert_eq!(yearly.net.cents(), 180_000);

        // Yearly totals equal the sum of the individual months
        let summed: Money = yearly.months.iter().map(|m| m.total_income).sum();
        assert_eq!(summed, yearly.total_income);

        // Months without activity are present and zero
        assert!(yearly.months[1].total_income.is_zero());

        // A neighboring year sees none of it
        let other = YearlySummary::generate(&storage, user_id, 2023).unwrap();
        assert!(other.total_income.is_zero());
        assert!(other.net.is_zero());
    }

    #[test]
    fn test_invalid_month_is_a_validation_error() {
        let (_dir, storage) = create_test_storage();
        let result = MonthlySummary::generate(&storage, UserId::new(), 2024, 13);
        assert!(matches!(result, Err(FintrackError::Validation(_))));
    }

    #[test]
    fn test_summarize_period_with_no_transactions() {
        // summarize_period is pure: feeding it an empty slice yields zeros
        let period = MonthPeriod::new(2024, 3).unwrap();
        let summary = summarize_period(&[], &HashMap::new(), period);
        assert!(summary.total_income.is_zero());
        assert!(summary.category_breakdown.is_empty());
    }
}
