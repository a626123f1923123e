use crate::errors::CoreError;

/// Currency helpers shared by the valuators.
///
/// No rates are looked up here: whoever builds the inputs supplies the
/// exchange rate alongside the amount it applies to.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Trim and uppercase a currency code, rejecting anything that is not
    /// exactly 3 ASCII letters.
    pub fn normalize(code: &str) -> Result<String, CoreError> {
        let trimmed = code.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCurrency(code.to_string()));
        }
        Ok(trimmed)
    }

    /// Case-insensitive currency comparison.
    #[must_use]
    pub fn same_currency(a: &str, b: &str) -> bool {
        a.trim().eq_ignore_ascii_case(b.trim())
    }

    /// Express `amount` in the quote currency.
    ///
    /// Without a rate the amount is taken to already be in the quote currency.
    #[must_use]
    pub fn to_quote(&self, amount: f64, rate: Option<f64>) -> f64 {
        match rate {
            Some(rate) => amount * rate,
            None => amount,
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
