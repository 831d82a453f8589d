//! Selection of fixations with unusually large pupils.
//!
//! Used to pick which fixations get a text annotation on fixation plots.

use crate::error::{GazeError, Result};
use crate::statistics::compute_quantile;
use crate::types::Fixation;

/// Fixations whose pupil size is strictly above the `quantile` of the trial.
///
/// Order is preserved. An empty input yields an empty selection.
///
/// # Errors
///
/// [`GazeError::InvalidConfig`] if `quantile` is outside [0, 1].
pub fn high_pupil_fixations(fixations: &[Fixation], quantile: f64) -> Result<Vec<&Fixation>> {
    if !(0.0..=1.0).contains(&quantile) {
        return Err(GazeError::InvalidConfig(format!(
            "pupil quantile must be in [0, 1], got {}",
            quantile
        )));
    }
    if fixations.is_empty() {
        return Ok(Vec::new());
    }

    let pupils: Vec<f64> = fixations.iter().map(|f| f.pupil_size).collect();
    let cutoff = compute_quantile(&pupils, quantile);
    Ok(fixations.iter().filter(|f| f.pupil_size > cutoff).collect())
}
