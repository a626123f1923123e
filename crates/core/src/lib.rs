pub mod errors;
pub mod math;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use log::warn;
use serde::Serialize;
use uuid::Uuid;

use errors::CoreError;
use models::{
    budget::{Budget, BudgetStatus, BudgetSuggestion, Transaction},
    category::Category,
    investment::{InvestmentHolding, InvestmentValuation, PortfolioTotals, QuickQuote, QuickQuoteInput},
    real_estate::{RealEstateMetrics, RealEstateParams},
    savings::{CompoundingFrequency, SavingsParams, SavingsProjection},
    settings::Settings,
};
use services::{
    budget_service::BudgetService, categorization_service::CategorizationService,
    currency_service::CurrencyService, investment_service::InvestmentService,
    real_estate_service::RealEstateService, savings_service::SavingsService,
};

/// Rounding slack allowed between `unit_price × quantity` and `amount_paid`.
const FEE_TOLERANCE: f64 = 0.01;

/// Main entry point for the Family Finance core library.
///
/// The calculators behind it are pure and never fail. The engine is the
/// boundary in front of them: it checks inputs the way a request handler
/// would, and turns bad input into a `CoreError` instead of a number.
#[must_use]
pub struct FinanceEngine {
    settings: Settings,
    real_estate_service: RealEstateService,
    investment_service: InvestmentService,
    savings_service: SavingsService,
    budget_service: BudgetService,
    categorization_service: CategorizationService,
}

impl std::fmt::Debug for FinanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceEngine")
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for FinanceEngine {
    fn default() -> Self {
        Self::build(Settings::default())
    }
}

impl FinanceEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given settings, validated first.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        Ok(Self::build(settings.validated()?))
    }

    /// Create an engine from a JSON settings document.
    pub fn from_settings_json(json: &str) -> Result<Self, CoreError> {
        Ok(Self::build(Settings::from_json(json)?))
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the quote currency used when a holding does not name one.
    pub fn set_default_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        self.settings.default_currency = CurrencyService::normalize(currency)?;
        Ok(())
    }

    // ── Real Estate ─────────────────────────────────────────────────

    /// Cash flow, payback and cumulative series for a rental property.
    pub fn real_estate_metrics(
        &self,
        params: &RealEstateParams,
    ) -> Result<RealEstateMetrics, CoreError> {
        params.validate().inspect_err(|e| warn!("Rejected real-estate input: {e}"))?;
        Ok(self
            .real_estate_service
            .metrics_with_horizon(params, self.settings.projection_months))
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Value a holding at `current_price` (in the holding's quote currency).
    ///
    /// An empty quote currency falls back to the default currency.
    pub fn value_investment(
        &self,
        holding: &InvestmentHolding,
        current_price: f64,
    ) -> Result<InvestmentValuation, CoreError> {
        let quote = if holding.quote_currency.trim().is_empty() {
            self.settings.default_currency.clone()
        } else {
            CurrencyService::normalize(&holding.quote_currency)?
        };
        Self::check_non_negative("currentPrice", current_price)?;
        for position in &holding.positions {
            Self::check_non_negative("quantity", position.quantity)?;
            Self::check_non_negative("amountPaid", position.amount_paid)?;
            Self::check_non_negative("unitPrice", position.unit_price)?;
            if position.implied_fees() < -FEE_TOLERANCE {
                return Err(CoreError::ValidationError(format!(
                    "Position {} paid {} for {} units at {}: less than the units cost",
                    position.id, position.amount_paid, position.quantity, position.unit_price
                )));
            }
            CurrencyService::normalize(&position.paid_currency)?;
            if let Some(rate) = position.fx_rate_to_quote {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(CoreError::ValidationError(format!(
                        "Exchange rate of position {} must be positive, got {rate}",
                        position.id
                    )));
                }
            }
        }

        if quote == holding.quote_currency {
            return Ok(self.investment_service.value(holding, current_price));
        }
        let normalized = InvestmentHolding {
            quote_currency: quote,
            ..holding.clone()
        };
        Ok(self.investment_service.value(&normalized, current_price))
    }

    /// Cost basis and P&L of a single lot that was never recorded.
    pub fn quick_quote(&self, input: &QuickQuoteInput) -> Result<QuickQuote, CoreError> {
        Self::check_non_negative("quantity", input.quantity)?;
        Self::check_non_negative("buyUnitPriceQuote", input.buy_unit_price_quote)?;
        Self::check_non_negative("fees", input.fees)?;
        Self::check_non_negative("currentPrice", input.current_price)?;
        Ok(self.investment_service.quick_quote(input))
    }

    /// Totals and allocation across valuations sharing one quote currency.
    pub fn portfolio_totals(
        &self,
        valuations: &[InvestmentValuation],
    ) -> Result<PortfolioTotals, CoreError> {
        if let Some(first) = valuations.first() {
            if let Some(other) = valuations
                .iter()
                .find(|v| !CurrencyService::same_currency(&v.quote_currency, &first.quote_currency))
            {
                return Err(CoreError::ValidationError(format!(
                    "Cannot total holdings quoted in {} and {}",
                    first.quote_currency, other.quote_currency
                )));
            }
        }
        Ok(self.investment_service.summarize(valuations))
    }

    // ── Savings ─────────────────────────────────────────────────────

    /// One-year projection of a savings account.
    pub fn savings_projection(
        &self,
        params: &SavingsParams,
    ) -> Result<SavingsProjection, CoreError> {
        params.validate().inspect_err(|e| warn!("Rejected savings input: {e}"))?;
        Ok(self.savings_service.project(params))
    }

    /// Value on `as_of` of an amount invested at a fixed rate since `start_date`.
    pub fn savings_value_at(
        &self,
        base_amount: f64,
        annual_rate_pct: f64,
        frequency: CompoundingFrequency,
        start_date: NaiveDate,
        as_of: NaiveDate,
    ) -> Result<f64, CoreError> {
        Self::check_non_negative("baseAmount", base_amount)
            .and_then(|()| Self::check_non_negative("annualRate", annual_rate_pct))
            .inspect_err(|e| warn!("Rejected rate-based valuation input: {e}"))?;
        Ok(self
            .savings_service
            .value_at(base_amount, annual_rate_pct, frequency, start_date, as_of))
    }

    /// Same as [`savings_value_at`](Self::savings_value_at), valued today.
    pub fn savings_value_today(
        &self,
        base_amount: f64,
        annual_rate_pct: f64,
        frequency: CompoundingFrequency,
        start_date: NaiveDate,
    ) -> Result<f64, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.savings_value_at(base_amount, annual_rate_pct, frequency, start_date, today)
    }

    // ── Budgets ─────────────────────────────────────────────────────

    /// Suggested monthly budgets from the last three months of expenses.
    #[must_use]
    pub fn suggest_budgets(
        &self,
        transactions: &[Transaction],
        as_of: NaiveDate,
    ) -> Vec<BudgetSuggestion> {
        self.budget_service.suggest(transactions, as_of)
    }

    /// Spending against each budget for the month containing `month`.
    ///
    /// Every budget must target a known top-level category.
    pub fn budget_status(
        &self,
        budgets: &[Budget],
        categories: &[Category],
        transactions: &[Transaction],
        month: NaiveDate,
    ) -> Result<Vec<BudgetStatus>, CoreError> {
        for budget in budgets {
            let category = Self::find_category(categories, budget.category_id)?;
            if category.parent_id.is_some() {
                return Err(CoreError::ValidationError(format!(
                    "Budget on '{}' must target its parent category",
                    category.name
                )));
            }
            Self::check_non_negative("budget amount", budget.amount)?;
        }
        Ok(self.budget_service.status(budgets, transactions, month))
    }

    // ── Categories ──────────────────────────────────────────────────

    /// Category matching `description` by keyword, if any.
    #[must_use]
    pub fn categorize<'a>(&self, description: &str, categories: &'a [Category]) -> Option<&'a Category> {
        self.categorization_service.categorize(description, categories)
    }

    /// Assign a category to every uncategorized transaction a keyword matches.
    /// Returns the number of transactions assigned.
    pub fn auto_categorize(&self, transactions: &mut [Transaction], categories: &[Category]) -> usize {
        self.categorization_service
            .categorize_all(transactions, categories)
    }

    /// Look up a category by id.
    pub fn find_category(categories: &[Category], id: Uuid) -> Result<&Category, CoreError> {
        categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Render any result as pretty JSON, with the camelCase field names
    /// HTTP consumers expect.
    pub fn to_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize result: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn check_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "{field} must be a non-negative number, got {value}"
            )));
        }
        Ok(())
    }

    fn build(settings: Settings) -> Self {
        Self {
            settings,
            real_estate_service: RealEstateService::new(),
            investment_service: InvestmentService::new(),
            savings_service: SavingsService::new(),
            budget_service: BudgetService::new(),
            categorization_service: CategorizationService::new(),
        }
    }
}
