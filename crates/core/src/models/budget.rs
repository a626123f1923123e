use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A bank transaction as seen by the budget calculators.
///
/// Expenses are stored negative, income positive. The category is
/// denormalized: `parent_category_id` is the parent of `category_id`, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub parent_category_id: Option<Uuid>,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            description: description.into(),
            category_id: None,
            parent_category_id: None,
        }
    }

    /// Assign `category`, carrying its parent along.
    #[must_use]
    pub fn in_category(mut self, category: &Category) -> Self {
        self.assign(category);
        self
    }

    pub fn assign(&mut self, category: &Category) {
        self.category_id = Some(category.id);
        self.parent_category_id = category.parent_id;
    }

    /// Top-level category this transaction rolls up to, if categorized.
    #[must_use]
    pub fn budget_key(&self) -> Option<Uuid> {
        self.category_id
            .map(|id| self.parent_category_id.unwrap_or(id))
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// A monthly spending limit on a top-level category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category_id: Uuid,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSuggestion {
    pub category_id: Uuid,
    /// Absolute spending over the three-month window
    pub total_3_months: f64,
    pub suggested_amount: f64,
}

/// Spending against a budget for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category_id: Uuid,
    pub budgeted: f64,
    pub spent: f64,
    /// Negative once the budget is exceeded
    pub remaining: f64,
    pub percent_used: f64,
    pub over_budget: bool,
}
