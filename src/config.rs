//! Configuration for heatmap rasterization and engagement metrics.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_KERNEL_SIZE, DEFAULT_ROUND_DECIMALS, DEFAULT_SAMPLE_PERIOD_S, DEFAULT_SD_DIVISOR,
};
use crate::error::{GazeError, Result};

/// Configuration options for `HeatmapAccumulator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Side length of the square Gaussian kernel in pixels (default: 200).
    pub kernel_size: usize,

    /// Standard deviation is `kernel_size / sd_divisor` (default: 6.0).
    pub sd_divisor: f64,

    /// Post-process applied to produce the display grid (default: `MeanOfPositive`).
    ///
    /// The raw accumulated grid is always kept alongside the display grid.
    pub threshold: DisplayThreshold,
}

/// Low-value suppression applied to a raw heatmap for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayThreshold {
    /// Leave the display grid identical to the raw grid.
    None,

    /// Mask (as `NaN`) every cell below the mean of the strictly positive cells.
    ///
    /// Keeps sparse low-intensity spread from visually dominating the overlay.
    #[default]
    MeanOfPositive,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            sd_divisor: DEFAULT_SD_DIVISOR,
            threshold: DisplayThreshold::MeanOfPositive,
        }
    }
}

impl HeatmapConfig {
    /// Default kernel with thresholding disabled.
    pub fn raw() -> Self {
        Self {
            threshold: DisplayThreshold::None,
            ..Self::default()
        }
    }

    /// Kernel standard deviation in pixels.
    pub fn kernel_sd(&self) -> f64 {
        self.kernel_size as f64 / self.sd_divisor
    }

    /// Check that the kernel can be built.
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size == 0 {
            return Err(GazeError::InvalidConfig(
                "kernel_size must be at least 1".to_string(),
            ));
        }
        if !(self.sd_divisor.is_finite() && self.sd_divisor > 0.0) {
            return Err(GazeError::InvalidConfig(format!(
                "sd_divisor must be positive and finite, got {}",
                self.sd_divisor
            )));
        }
        Ok(())
    }
}

/// Configuration options for `RegionEngagementAnalyzer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementConfig {
    /// Seconds between consecutive raw samples (default: 0.001, i.e. 1 kHz).
    pub sample_period_s: f64,

    /// Decimal places kept for the diagnosis duration and pupil averages (default: 2).
    ///
    /// Densities are never rounded.
    pub round_decimals: i32,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            sample_period_s: DEFAULT_SAMPLE_PERIOD_S,
            round_decimals: DEFAULT_ROUND_DECIMALS,
        }
    }
}

impl EngagementConfig {
    /// Check the sampling period and rounding precision.
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_period_s.is_finite() && self.sample_period_s > 0.0) {
            return Err(GazeError::InvalidConfig(format!(
                "sample_period_s must be positive and finite, got {}",
                self.sample_period_s
            )));
        }
        if !(0..=15).contains(&self.round_decimals) {
            return Err(GazeError::InvalidConfig(format!(
                "round_decimals must be in 0..=15, got {}",
                self.round_decimals
            )));
        }
        Ok(())
    }
}
