use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Parameters of a buy-to-let property.
///
/// All amounts share a single currency. Monthly and yearly figures are kept
/// as entered; the calculator normalizes them to a monthly basis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateParams {
    pub purchase_price: f64,
    pub notary_fees: f64,
    pub initial_works: f64,
    pub down_payment: f64,

    pub loan_monthly_payment: f64,
    pub loan_insurance_monthly: f64,

    pub rent_monthly: f64,
    /// Expected vacancy, in percent of the year (e.g., `8.0` for 8 %)
    pub vacancy_rate_pct: f64,

    pub non_recoverable_charges_monthly: f64,
    pub property_tax_yearly: f64,
    pub insurance_yearly: f64,

    #[serde(default)]
    pub maintenance_reserve_monthly: Option<f64>,
}

impl RealEstateParams {
    /// Rent actually collected per month once vacancy is accounted for.
    #[must_use]
    pub fn net_rent(&self) -> f64 {
        self.rent_monthly * (1.0 - self.vacancy_rate_pct / 100.0)
    }

    /// Every recurring outflow, brought to a monthly amount.
    #[must_use]
    pub fn monthly_costs(&self) -> f64 {
        self.loan_monthly_payment
            + self.loan_insurance_monthly
            + self.non_recoverable_charges_monthly
            + self.property_tax_yearly / 12.0
            + self.insurance_yearly / 12.0
            + self.maintenance_reserve_monthly.unwrap_or(0.0)
    }

    /// Cash put in on day one (the loan-financed part excluded).
    #[must_use]
    pub fn cash_initial(&self) -> f64 {
        self.down_payment + self.notary_fees + self.initial_works
    }

    /// Caller-side checks: every amount finite and non-negative, vacancy
    /// between 0 and 100 %.
    pub fn validate(&self) -> Result<(), CoreError> {
        let amounts = [
            ("purchasePrice", self.purchase_price),
            ("notaryFees", self.notary_fees),
            ("initialWorks", self.initial_works),
            ("downPayment", self.down_payment),
            ("loanMonthlyPayment", self.loan_monthly_payment),
            ("loanInsuranceMonthly", self.loan_insurance_monthly),
            ("rentMonthly", self.rent_monthly),
            ("nonRecoverableChargesMonthly", self.non_recoverable_charges_monthly),
            ("propertyTaxYearly", self.property_tax_yearly),
            ("insuranceYearly", self.insurance_yearly),
            (
                "maintenanceReserveMonthly",
                self.maintenance_reserve_monthly.unwrap_or(0.0),
            ),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{field} must be a non-negative amount, got {value}"
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.vacancy_rate_pct) {
            return Err(CoreError::ValidationError(format!(
                "vacancyRatePct must be between 0 and 100, got {}",
                self.vacancy_rate_pct
            )));
        }
        Ok(())
    }
}

/// One month of the cumulative cash position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    pub month: u32,
    pub cumulative: f64,
}

/// Cash-flow and payback figures for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateMetrics {
    /// Monthly net cash flow; negative when costs exceed net rent
    pub cashflow_net: f64,

    pub cash_initial: f64,

    /// `None` unless the property yields a positive monthly cash flow
    pub payback_months: Option<f64>,
    pub payback_years: Option<f64>,

    /// Month 0 starts at `-cash_initial`, each following month adds the net cash flow
    pub cumulative_series: Vec<CumulativePoint>,
}
