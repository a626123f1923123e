use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::services::currency_service::CurrencyService;

/// Horizon of the real-estate cumulative series, in months (30 years).
pub const DEFAULT_PROJECTION_MONTHS: u32 = 360;

/// Longest accepted horizon (100 years).
pub const MAX_PROJECTION_MONTHS: u32 = 1200;

/// Engine configuration, supplied by the embedding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Quote currency used when a request does not name one (e.g., "EUR", "USD").
    pub default_currency: String,

    /// Months covered by the real-estate cumulative series (the series holds one more point, month 0).
    pub projection_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_currency: "EUR".to_string(),
            projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validated()
    }

    /// Normalize the currency code and check the horizon.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.default_currency = CurrencyService::normalize(&self.default_currency)?;
        if self.projection_months == 0 || self.projection_months > MAX_PROJECTION_MONTHS {
            return Err(CoreError::ValidationError(format!(
                "Projection horizon must be between 1 and {MAX_PROJECTION_MONTHS} months, got {}",
                self.projection_months
            )));
        }
        Ok(self)
    }
}
