use chrono::NaiveDate;
use log::debug;

use crate::math::round2;
use crate::models::savings::{
    CapitalizationMode, CompoundingFrequency, SavingsParams, SavingsProjection,
};

/// Average days per year, leap years included.
const DAYS_PER_YEAR: f64 = 365.25;

/// Projects rate-based savings accounts.
///
/// Each capitalization mode keeps its own treatment of monthly
/// contributions: only the monthly mode compounds them.
pub struct SavingsService;

impl SavingsService {
    pub fn new() -> Self {
        Self
    }

    /// Balance and interest expected one year from now.
    #[must_use]
    pub fn project(&self, params: &SavingsParams) -> SavingsProjection {
        let balance = params.current_balance;
        let contribution = params.monthly_contribution.unwrap_or(0.0);
        let contributed = 12.0 * contribution;

        let Some(rate_pct) = params.annual_rate else {
            return SavingsProjection {
                current_value: round2(balance),
                projection_1y: round2(balance + contributed),
                estimated_interest_1y: None,
            };
        };
        let rate = rate_pct / 100.0;

        let (projection, interest) = match params.mode {
            CapitalizationMode::SimpleAnnual => {
                // Contributions do not earn interest; the estimate uses the
                // mid-year balance.
                let projection = balance * (1.0 + rate) + contributed;
                let interest = (balance + contribution * 6.0) * rate;
                (projection, interest)
            }
            CapitalizationMode::Monthly => {
                let monthly_rate = rate / 12.0;
                let grown_balance = balance * (1.0 + monthly_rate).powi(12);
                // The contribution of month m compounds for 12 - m + 1 periods.
                let grown_contributions: f64 = (1..=12)
                    .map(|m| contribution * (1.0 + monthly_rate).powi(12 - m + 1))
                    .sum();
                let projection = grown_balance + grown_contributions;
                (projection, projection - balance - contributed)
            }
            CapitalizationMode::Quarterly => {
                // Contributions are added without intra-year compounding.
                let projection = balance * (1.0 + rate / 4.0).powi(4) + contributed;
                (projection, projection - balance - contributed)
            }
        };

        debug!(
            "Savings projection ({}): balance={balance:.2}, rate={rate_pct}%, projection={projection:.2}",
            params.mode
        );

        SavingsProjection {
            current_value: round2(balance),
            projection_1y: round2(projection),
            estimated_interest_1y: Some(round2(interest)),
        }
    }

    /// Value on `as_of` of `base_amount` placed on `start_date` at
    /// `annual_rate_pct`, compounded at `frequency`.
    ///
    /// Returns `base_amount` (to the cent) when no time has elapsed.
    #[must_use]
    pub fn value_at(
        &self,
        base_amount: f64,
        annual_rate_pct: f64,
        frequency: CompoundingFrequency,
        start_date: NaiveDate,
        as_of: NaiveDate,
    ) -> f64 {
        let elapsed_days = (as_of - start_date).num_days();
        if elapsed_days <= 0 {
            return round2(base_amount);
        }

        let years = elapsed_days as f64 / DAYS_PER_YEAR;
        let periods = frequency.periods_per_year();
        let rate = annual_rate_pct / 100.0;

        round2(base_amount * (1.0 + rate / periods).powf(periods * years))
    }
}

impl Default for SavingsService {
    fn default() -> Self {
        Self::new()
    }
}
