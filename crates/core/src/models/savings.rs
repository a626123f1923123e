use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How interest is capitalized over a one-year projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapitalizationMode {
    /// Interest paid once a year on the opening balance
    #[serde(rename = "simple_annuel")]
    SimpleAnnual,
    #[serde(rename = "capitalisation_mensuelle")]
    Monthly,
    #[serde(rename = "capitalisation_trimestrielle")]
    Quarterly,
}

impl std::fmt::Display for CapitalizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapitalizationMode::SimpleAnnual => write!(f, "simple_annuel"),
            CapitalizationMode::Monthly => write!(f, "capitalisation_mensuelle"),
            CapitalizationMode::Quarterly => write!(f, "capitalisation_trimestrielle"),
        }
    }
}

impl std::str::FromStr for CapitalizationMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "simple_annuel" => Ok(CapitalizationMode::SimpleAnnual),
            "capitalisation_mensuelle" => Ok(CapitalizationMode::Monthly),
            "capitalisation_trimestrielle" => Ok(CapitalizationMode::Quarterly),
            other => Err(CoreError::ValidationError(format!(
                "Unknown capitalization mode '{other}'"
            ))),
        }
    }
}

/// Compounding frequency used when valuing a rate-based asset at an
/// arbitrary date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Annual,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(self) -> f64 {
        match self {
            CompoundingFrequency::Annual => 1.0,
            CompoundingFrequency::Monthly => 12.0,
            CompoundingFrequency::Daily => 365.0,
        }
    }
}

/// A savings account to project one year ahead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsParams {
    pub current_balance: f64,
    /// Annual rate in percent (e.g., `3.0` for 3 %)
    #[serde(default)]
    pub annual_rate: Option<f64>,
    #[serde(default)]
    pub monthly_contribution: Option<f64>,
    pub mode: CapitalizationMode,
}

impl SavingsParams {
    pub fn new(current_balance: f64, mode: CapitalizationMode) -> Self {
        Self {
            current_balance,
            annual_rate: None,
            monthly_contribution: None,
            mode,
        }
    }

    #[must_use]
    pub fn with_rate(mut self, annual_rate: f64) -> Self {
        self.annual_rate = Some(annual_rate);
        self
    }

    #[must_use]
    pub fn with_contribution(mut self, monthly_contribution: f64) -> Self {
        self.monthly_contribution = Some(monthly_contribution);
        self
    }

    /// Caller-side checks. The projector itself accepts anything.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.current_balance.is_finite() || self.current_balance <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Current balance must be positive, got {}",
                self.current_balance
            )));
        }
        if let Some(rate) = self.annual_rate {
            if !rate.is_finite() || rate < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Annual rate must be a non-negative percentage, got {rate}"
                )));
            }
        }
        if let Some(contribution) = self.monthly_contribution {
            if !contribution.is_finite() || contribution < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Monthly contribution must not be negative, got {contribution}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProjection {
    pub current_value: f64,
    #[serde(rename = "projection1y")]
    pub projection_1y: f64,
    /// `None` when no rate is known
    #[serde(rename = "estimatedInterest1y")]
    pub estimated_interest_1y: Option<f64>,
}
