//! Monetary rounding.

/// Round a monetary value to two decimal places.
///
/// Applied once at document construction; amounts are never recomputed after
/// a document exists.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
