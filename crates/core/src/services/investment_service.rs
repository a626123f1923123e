use log::{debug, warn};

use crate::math::{pct, round2};
use crate::models::investment::{
    AllocationSlice, InvestmentHolding, InvestmentValuation, PortfolioTotals, Position,
    PositionValuation, QuickQuote, QuickQuoteInput,
};
use crate::services::currency_service::CurrencyService;

/// Values stock, ETF and crypto holdings at a given market price.
///
/// The price is provided by the caller, already in the holding's quote
/// currency. Cost basis is what was paid for each lot, converted with the
/// lot's own exchange rate.
pub struct InvestmentService {
    currency_service: CurrencyService,
}

impl InvestmentService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Cost basis of a lot in the quote currency.
    #[must_use]
    pub fn position_cost_basis(&self, position: &Position) -> f64 {
        self.currency_service
            .to_quote(position.amount_paid, position.fx_rate_to_quote)
    }

    /// Value every lot of `holding` and the holding as a whole.
    #[must_use]
    pub fn value(&self, holding: &InvestmentHolding, current_price: f64) -> InvestmentValuation {
        let mut cost_basis = 0.0;
        let mut fees = 0.0;
        let mut positions = Vec::with_capacity(holding.positions.len());

        for position in &holding.positions {
            if position.fx_rate_to_quote.is_none()
                && !CurrencyService::same_currency(&position.paid_currency, &holding.quote_currency)
            {
                warn!(
                    "Position {} of {} paid in {} has no rate to {}; amount taken as-is",
                    position.id, holding.symbol, position.paid_currency, holding.quote_currency
                );
            }

            let lot_cost = self.position_cost_basis(position);
            let lot_fees = self
                .currency_service
                .to_quote(position.implied_fees(), position.fx_rate_to_quote)
                .max(0.0);
            let lot_value = position.quantity * current_price;
            let lot_pl = lot_value - lot_cost;
            cost_basis += lot_cost;
            fees += lot_fees;

            positions.push(PositionValuation {
                position_id: position.id,
                quantity: position.quantity,
                cost_basis: round2(lot_cost),
                fees: round2(lot_fees),
                current_value: round2(lot_value),
                pl_value: round2(lot_pl),
                pl_pct: round2(pct(lot_pl, lot_cost)),
            });
        }

        let total_quantity = holding.total_quantity();
        let current_value = total_quantity * current_price;
        let pl_value = current_value - cost_basis;
        let average_cost = if total_quantity > 0.0 {
            cost_basis / total_quantity
        } else {
            0.0
        };

        debug!(
            "Valued {} {} ({} lots): cost_basis={cost_basis:.2} {}, current_value={current_value:.2}",
            holding.kind,
            holding.symbol,
            positions.len(),
            holding.quote_currency
        );

        InvestmentValuation {
            symbol: holding.symbol.clone(),
            kind: holding.kind,
            quote_currency: holding.quote_currency.clone(),
            current_price,
            total_quantity,
            average_cost,
            cost_basis: round2(cost_basis),
            fees: round2(fees),
            current_value: round2(current_value),
            pl_value: round2(pl_value),
            pl_pct: round2(pct(pl_value, cost_basis)),
            positions,
        }
    }

    /// Same formulas as [`value`](Self::value) for a single synthetic lot
    /// costing `quantity × buy_unit_price_quote + fees`.
    #[must_use]
    pub fn quick_quote(&self, input: &QuickQuoteInput) -> QuickQuote {
        let cost_basis = input.quantity * input.buy_unit_price_quote + input.fees;
        let current_value = input.quantity * input.current_price;
        let pl_value = current_value - cost_basis;

        QuickQuote {
            cost_basis_quote: round2(cost_basis),
            current_value: round2(current_value),
            pl_value: round2(pl_value),
            pl_pct: round2(pct(pl_value, cost_basis)),
        }
    }

    /// Roll several valuations up into totals and an allocation breakdown.
    ///
    /// All valuations are expected in the same quote currency.
    #[must_use]
    pub fn summarize(&self, valuations: &[InvestmentValuation]) -> PortfolioTotals {
        let cost_basis: f64 = valuations.iter().map(|v| v.cost_basis).sum();
        let current_value: f64 = valuations.iter().map(|v| v.current_value).sum();
        let pl_value = current_value - cost_basis;

        let mut allocation: Vec<AllocationSlice> = valuations
            .iter()
            .map(|v| AllocationSlice {
                symbol: v.symbol.clone(),
                current_value: v.current_value,
                allocation_pct: round2(pct(v.current_value, current_value)),
            })
            .collect();

        // Largest first
        allocation.sort_by(|a, b| {
            b.current_value
                .partial_cmp(&a.current_value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        PortfolioTotals {
            cost_basis: round2(cost_basis),
            current_value: round2(current_value),
            pl_value: round2(pl_value),
            pl_pct: round2(pct(pl_value, cost_basis)),
            allocation,
        }
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new()
    }
}
