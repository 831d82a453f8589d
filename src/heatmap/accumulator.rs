//! Gaussian footprint accumulation over a padded canvas.

use log::{debug, trace};

use super::kernel::GaussianKernel;
use crate::config::{DisplayThreshold, HeatmapConfig};
use crate::error::{GazeError, Result};
use crate::result::Heatmap;
use crate::types::{CanvasSize, Fixation, Grid, HeatmapWeight, Point};

/// Rasterizes weighted fixations into a heatmap.
///
/// The kernel is built once at construction; every call to
/// [`accumulate`](Self::accumulate) owns its own canvas, so one accumulator
/// can be shared freely across threads.
///
/// # Example
///
/// ```
/// use gaze_metrics::{CanvasSize, HeatmapAccumulator, Point};
///
/// let heatmap = HeatmapAccumulator::new()
///     .accumulate(&[Point::new(512.0, 384.0)], &[250.0], CanvasSize::new(1024, 768))
///     .unwrap();
/// assert_eq!(heatmap.value_at(512, 384), Some(250.0));
/// ```
#[derive(Debug, Clone)]
pub struct HeatmapAccumulator {
    config: HeatmapConfig,
    kernel: GaussianKernel,
}

/// Overlap of a kernel footprint with the padded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    src_row: usize,
    src_col: usize,
    dst_row: usize,
    dst_col: usize,
    rows: usize,
    cols: usize,
}

impl Default for HeatmapAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatmapAccumulator {
    /// Create with the default 200 px kernel and mean-of-positive display threshold.
    pub fn new() -> Self {
        let config = HeatmapConfig::default();
        let kernel = GaussianKernel::new(config.kernel_size, config.kernel_sd());
        Self { config, kernel }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: HeatmapConfig) -> Result<Self> {
        config.validate()?;
        let kernel = GaussianKernel::new(config.kernel_size, config.kernel_sd());
        Ok(Self { config, kernel })
    }

    /// Set the display post-process.
    pub fn threshold(mut self, threshold: DisplayThreshold) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    /// The footprint stamped for each point.
    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Accumulate `weights[i] * kernel` centered on `points[i]`.
    ///
    /// Footprints are clipped at the canvas edge; points whose footprint
    /// misses the canvas entirely (including non-finite coordinates) add
    /// nothing. Weights are expected to be non-negative; negative weights are
    /// a caller error and produce undefined display output.
    ///
    /// # Errors
    ///
    /// [`GazeError::InvalidCanvas`] for a zero-sized canvas and
    /// [`GazeError::LengthMismatch`] when `weights` and `points` differ in length.
    pub fn accumulate(&self, points: &[Point], weights: &[f64], canvas: CanvasSize) -> Result<Heatmap> {
        canvas.validate()?;
        if points.len() != weights.len() {
            return Err(GazeError::LengthMismatch {
                what: "weights",
                expected: points.len(),
                actual: weights.len(),
            });
        }

        let size = self.kernel.size();
        let pad = self.kernel.half();
        let rows = canvas.height + size;
        let cols = canvas.width + size;
        let mut padded = Grid::zeros(rows, cols);

        let mut skipped = 0usize;
        for (point, &weight) in points.iter().zip(weights) {
            match self.placement(point, rows, cols) {
                Some(window) => self.stamp(&mut padded, window, weight),
                None => {
                    trace!("footprint at ({}, {}) misses the canvas", point.x, point.y);
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            debug!(
                "{} of {} footprints fell outside a {}x{} canvas",
                skipped,
                points.len(),
                canvas.width,
                canvas.height
            );
        }

        let raw = padded
            .view((pad, pad), (canvas.height, canvas.width))
            .into_owned();
        let (display, lowbound) = self.config.threshold.apply(&raw);

        Ok(Heatmap {
            raw,
            display,
            lowbound,
            threshold: self.config.threshold,
        })
    }

    /// Accumulate fixations weighted by duration or pupil size.
    pub fn accumulate_fixations(
        &self,
        fixations: &[Fixation],
        weight: HeatmapWeight,
        canvas: CanvasSize,
    ) -> Result<Heatmap> {
        let points: Vec<Point> = fixations.iter().map(Fixation::point).collect();
        let weights: Vec<f64> = fixations.iter().map(|f| f.weight(weight)).collect();
        self.accumulate(&points, &weights, canvas)
    }

    /// Kernel window for `point` clipped to a `rows x cols` padded grid.
    ///
    /// The footprint's top-left corner in padded coordinates is
    /// `pad + floor(coord) - half`, with the padding equal to the half-width.
    fn placement(&self, point: &Point, rows: usize, cols: usize) -> Option<Window> {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return None;
        }
        let size = self.kernel.size();
        let half = self.kernel.half() as i64;
        let pad = half;
        let origin = |coord: f64| pad.saturating_add(coord.floor() as i64).saturating_sub(half);
        let origin_col = origin(point.x);
        let origin_row = origin(point.y);

        let (src_col, dst_col, ncols) = clip_axis(origin_col, size, cols)?;
        let (src_row, dst_row, nrows) = clip_axis(origin_row, size, rows)?;
        Some(Window {
            src_row,
            src_col,
            dst_row,
            dst_col,
            rows: nrows,
            cols: ncols,
        })
    }

    fn stamp(&self, padded: &mut Grid, window: Window, weight: f64) {
        let kernel = self.kernel.values();
        for c in 0..window.cols {
            for r in 0..window.rows {
                padded[(window.dst_row + r, window.dst_col + c)] +=
                    kernel[(window.src_row + r, window.src_col + c)] * weight;
            }
        }
    }
}

/// Clip `[origin, origin + len)` to `[0, limit)`.
///
/// Returns `(source_start, destination_start, overlap)` or `None` when the
/// two ranges do not overlap.
fn clip_axis(origin: i64, len: usize, limit: usize) -> Option<(usize, usize, usize)> {
    let start = origin.max(0);
    let end = origin.saturating_add(len as i64).min(limit as i64);
    if end <= start {
        return None;
    }
    Some(((start - origin) as usize, start as usize, (end - start) as usize))
}
