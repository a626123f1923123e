use log::debug;

use crate::math::round2;
use crate::models::real_estate::{CumulativePoint, RealEstateMetrics, RealEstateParams};
use crate::models::settings::DEFAULT_PROJECTION_MONTHS;

/// Cash-flow and payback calculator for rental properties.
///
/// Pure business logic: single currency, no I/O, no failure path.
pub struct RealEstateService;

impl RealEstateService {
    pub fn new() -> Self {
        Self
    }

    /// Metrics with the default 30-year cumulative series (361 points).
    #[must_use]
    pub fn metrics(&self, params: &RealEstateParams) -> RealEstateMetrics {
        self.metrics_with_horizon(params, DEFAULT_PROJECTION_MONTHS)
    }

    /// Compute:
    /// - Net monthly cash flow (net rent minus all monthly-normalized costs)
    /// - Initial cash outlay
    /// - Payback period, only when the cash flow is strictly positive
    /// - Cumulative cash position for months `0..=horizon_months`
    #[must_use]
    pub fn metrics_with_horizon(
        &self,
        params: &RealEstateParams,
        horizon_months: u32,
    ) -> RealEstateMetrics {
        let cashflow_net = params.net_rent() - params.monthly_costs();
        let cash_initial = params.cash_initial();

        let payback_months = if cashflow_net > 0.0 {
            Some(cash_initial / cashflow_net)
        } else {
            None
        };

        // Each point is derived from month 0 rather than the previous point,
        // so rounding never accumulates along the series.
        let cumulative_series = (0..=horizon_months)
            .map(|month| CumulativePoint {
                month,
                cumulative: round2(-cash_initial + f64::from(month) * cashflow_net),
            })
            .collect();

        debug!(
            "Real-estate metrics: cashflow_net={cashflow_net:.2}, cash_initial={cash_initial:.2}, payback_months={payback_months:?}"
        );

        RealEstateMetrics {
            cashflow_net: round2(cashflow_net),
            cash_initial: round2(cash_initial),
            payback_months: payback_months.map(round2),
            payback_years: payback_months.map(|m| round2(m / 12.0)),
            cumulative_series,
        }
    }
}

impl Default for RealEstateService {
    fn default() -> Self {
        Self::new()
    }
}
