use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a market-priced holding.
/// Determines which external quote source the caller asks for a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Stock,
    Etf,
    Crypto,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Stock => write!(f, "Stock"),
            AssetKind::Etf => write!(f, "ETF"),
            AssetKind::Crypto => write!(f, "Crypto"),
        }
    }
}

/// A single purchase lot.
///
/// `amount_paid` is what actually left the account, fees included, in
/// `paid_currency`. When that currency differs from the holding's quote
/// currency, `fx_rate_to_quote` converts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: Uuid,
    pub quantity: f64,
    /// Cost per unit in the paid currency
    pub unit_price: f64,
    pub amount_paid: f64,
    pub paid_currency: String,
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub fx_rate_to_quote: Option<f64>,
}

impl Position {
    pub fn new(
        quantity: f64,
        unit_price: f64,
        amount_paid: f64,
        paid_currency: impl Into<String>,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            quantity,
            unit_price,
            amount_paid,
            paid_currency: paid_currency.into().to_uppercase(),
            purchase_date,
            fx_rate_to_quote: None,
        }
    }

    /// Part of `amount_paid` not explained by the units themselves (broker
    /// fees, spread), in the paid currency.
    #[must_use]
    pub fn implied_fees(&self) -> f64 {
        self.amount_paid - self.unit_price * self.quantity
    }

    /// Attach the rate converting `paid_currency` into the quote currency.
    #[must_use]
    pub fn with_fx_rate(mut self, rate: f64) -> Self {
        self.fx_rate_to_quote = Some(rate);
        self
    }
}

/// A holding in one asset, made of one or more purchase lots.
///
/// Total quantity and cost basis are always derived from `positions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentHolding {
    /// Base symbol, uppercased (e.g., "BTC", "AAPL", "CW8")
    pub symbol: String,
    pub kind: AssetKind,
    pub quote_currency: String,
    pub positions: Vec<Position>,
}

impl InvestmentHolding {
    pub fn new(symbol: impl Into<String>, kind: AssetKind, quote_currency: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            kind,
            quote_currency: quote_currency.into().to_uppercase(),
            positions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    #[must_use]
    pub fn total_quantity(&self) -> f64 {
        self.positions.iter().map(|p| p.quantity).sum()
    }
}

/// Valuation of one lot at the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub position_id: Uuid,
    pub quantity: f64,
    pub cost_basis: f64,
    /// Fees included in the cost basis, in the quote currency
    pub fees: f64,
    pub current_value: f64,
    pub pl_value: f64,
    pub pl_pct: f64,
}

/// Valuation of a whole holding, expressed in its quote currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentValuation {
    pub symbol: String,
    pub kind: AssetKind,
    pub quote_currency: String,
    pub current_price: f64,
    pub total_quantity: f64,
    /// Cost basis divided by quantity held (0 when nothing is held)
    pub average_cost: f64,
    pub cost_basis: f64,
    /// Sum of the lots' fees, in the quote currency
    pub fees: f64,
    pub current_value: f64,
    pub pl_value: f64,
    pub pl_pct: f64,
    pub positions: Vec<PositionValuation>,
}

/// Inputs of a one-off quote, for a lot that was never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickQuoteInput {
    pub quantity: f64,
    pub buy_unit_price_quote: f64,
    #[serde(default)]
    pub fees: f64,
    pub current_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickQuote {
    pub cost_basis_quote: f64,
    pub current_value: f64,
    pub pl_value: f64,
    pub pl_pct: f64,
}

/// Share of one holding in a set of valuations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub symbol: String,
    pub current_value: f64,
    pub allocation_pct: f64,
}

/// Totals across several holdings valued in the same quote currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub cost_basis: f64,
    pub current_value: f64,
    pub pl_value: f64,
    pub pl_pct: f64,
    /// Largest holding first
    pub allocation: Vec<AllocationSlice>,
}
