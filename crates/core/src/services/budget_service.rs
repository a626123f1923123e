use chrono::{Datelike, Months, NaiveDate};
use log::debug;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::math::{pct, round2};
use crate::models::budget::{Budget, BudgetStatus, BudgetSuggestion, Transaction};

/// Months of history a suggestion is averaged over. Fixed, even when some
/// of those months have no spending at all.
pub const SUGGESTION_MONTHS: u32 = 3;

/// Budget suggestions and month-to-date tracking.
///
/// Spending always rolls up to the top-level category: a transaction on a
/// child category counts against its parent.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// First day of the month three calendar months before `as_of`'s month.
    #[must_use]
    pub fn window_start(&self, as_of: NaiveDate) -> NaiveDate {
        as_of
            .with_day(1)
            .and_then(|first| first.checked_sub_months(Months::new(SUGGESTION_MONTHS)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Suggest a monthly budget per top-level category from the expenses of
    /// the trailing window. Highest suggestion first.
    #[must_use]
    pub fn suggest(&self, transactions: &[Transaction], as_of: NaiveDate) -> Vec<BudgetSuggestion> {
        let from = self.window_start(as_of);
        let totals = Self::spending_by_key(
            transactions
                .iter()
                .filter(|t| t.date >= from && t.date <= as_of),
        );

        let mut suggestions: Vec<BudgetSuggestion> = totals
            .into_iter()
            .map(|(category_id, total)| BudgetSuggestion {
                category_id,
                total_3_months: round2(total),
                suggested_amount: (total / f64::from(SUGGESTION_MONTHS)).round(),
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.suggested_amount
                .partial_cmp(&a.suggested_amount)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category_id.cmp(&b.category_id))
        });

        debug!(
            "Budget suggestions since {from}: {} categories",
            suggestions.len()
        );
        suggestions
    }

    /// Spending against each budget during the calendar month containing `month`.
    #[must_use]
    pub fn status(
        &self,
        budgets: &[Budget],
        transactions: &[Transaction],
        month: NaiveDate,
    ) -> Vec<BudgetStatus> {
        let spent_by_key = Self::spending_by_key(
            transactions
                .iter()
                .filter(|t| t.date.year() == month.year() && t.date.month() == month.month()),
        );

        budgets
            .iter()
            .map(|budget| {
                let spent = spent_by_key
                    .get(&budget.category_id)
                    .copied()
                    .unwrap_or(0.0);
                BudgetStatus {
                    category_id: budget.category_id,
                    budgeted: round2(budget.amount),
                    spent: round2(spent),
                    remaining: round2(budget.amount - spent),
                    percent_used: round2(pct(spent, budget.amount)),
                    over_budget: spent > budget.amount,
                }
            })
            .collect()
    }

    /// Absolute expense total per top-level category. Income and
    /// uncategorized transactions are ignored.
    fn spending_by_key<'a>(
        transactions: impl Iterator<Item = &'a Transaction>,
    ) -> BTreeMap<Uuid, f64> {
        let mut totals = BTreeMap::new();
        for transaction in transactions.filter(|t| t.is_expense()) {
            if let Some(key) = transaction.budget_key() {
                *totals.entry(key).or_insert(0.0) += transaction.amount.abs();
            }
        }
        totals
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
