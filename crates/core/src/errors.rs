use thiserror::Error;

/// Unified error type for the entire family-finance-core library.
///
/// Calculators never fail; only input validation at the facade and JSON
/// (de)serialization produce a `CoreError`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input Validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid currency code '{0}': must be exactly 3 ASCII letters (e.g., EUR, USD)")]
    InvalidCurrency(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            CoreError::Deserialization(e.to_string())
        } else {
            CoreError::Serialization(e.to_string())
        }
    }
}
