//! Sample quantiles by linear interpolation between order statistics (R-7).

/// Quantile `p` of `data`, which may be in any order and is not modified.
///
/// Only the two order statistics around rank `p * (n - 1)` are located,
/// via `select_nth_unstable_by` on a copy.
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside [0, 1].
pub fn compute_quantile(data: &[f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "quantile of an empty sample");
    assert!((0.0..=1.0).contains(&p), "quantile level {} outside [0, 1]", p);

    let mut scratch = data.to_vec();
    let rank = p * (scratch.len() - 1) as f64;
    let below = rank.floor() as usize;
    let weight = rank - below as f64;

    let (_, &mut low, above) = scratch.select_nth_unstable_by(below, f64::total_cmp);
    match above.iter().copied().min_by(f64::total_cmp) {
        Some(high) if weight > 0.0 => low + weight * (high - low),
        _ => low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_odd_length() {
        let data = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert!((compute_quantile(&data, 0.5) - 3.0).abs() < 1e-10);
        // Input untouched
        assert_eq!(data, vec![5.0, 1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_upper_quartile_interpolates() {
        // rank = 3 * 0.75 = 2.25 -> 3.0 + 0.25 * (4.0 - 3.0)
        let data = [4.0, 1.0, 3.0, 2.0];
        assert!((compute_quantile(&data, 0.75) - 3.25).abs() < 1e-10);
    }

    #[test]
    fn test_extremes() {
        let data = [2.0, 9.0, -1.0];
        assert_eq!(compute_quantile(&data, 0.0), -1.0);
        assert_eq!(compute_quantile(&data, 1.0), 9.0);
        assert_eq!(compute_quantile(&[7.0], 0.3), 7.0);
    }

    #[test]
    #[should_panic(expected = "quantile of an empty sample")]
    fn test_empty_slice_panics() {
        compute_quantile(&[], 0.5);
    }
}
