//! Rounding and percentage helpers shared by the calculators.

/// Round to cents, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole × 100`, or `0.0` when `whole` is not positive.
///
/// Keeps `NaN` and infinities out of every percentage the library reports.
#[must_use]
pub fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

