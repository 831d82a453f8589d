//! Fixed-precision rounding for reported metrics.

/// Round `value` to `decimals` places.
///
/// Rounds the exact decimal expansion of the double, so `2.675` (stored as
/// `2.67499999...`) becomes `2.67`. Exact ties go to even. Non-finite values
/// pass through unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals.max(0) as usize;
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// `sum / count`, or `0.0` when nothing was counted.
pub fn safe_mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
