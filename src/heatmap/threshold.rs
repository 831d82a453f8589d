//! Display normalization for accumulated heatmaps.

use crate::config::DisplayThreshold;
use crate::types::Grid;

impl DisplayThreshold {
    /// Produce the display grid for `raw`.
    ///
    /// Returns the display grid and the cut-off that was applied, if any.
    /// Masked cells are `NaN` so renderers leave them transparent.
    pub fn apply(&self, raw: &Grid) -> (Grid, Option<f64>) {
        match self {
            DisplayThreshold::None => (raw.clone(), None),
            DisplayThreshold::MeanOfPositive => match mean_of_positive(raw) {
                Some(lowbound) => (mask_below(raw, lowbound), Some(lowbound)),
                None => (raw.clone(), None),
            },
        }
    }
}

/// Mean of the strictly positive cells, `None` when there are none.
///
/// Clamped to the positive range so that rounding in the sum never lifts the
/// mean above a uniform grid's value.
pub fn mean_of_positive(grid: &Grid) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in grid.iter().filter(|v| **v > 0.0) {
        sum += v;
        count += 1;
        min = min.min(v);
        max = max.max(v);
    }
    if count == 0 {
        return None;
    }
    Some((sum / count as f64).clamp(min, max))
}

/// Copy of `grid` with every cell strictly below `lowbound` set to `NaN`.
pub fn mask_below(grid: &Grid, lowbound: f64) -> Grid {
    grid.map(|v| if v < lowbound { f64::NAN } else { v })
}
