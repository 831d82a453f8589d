//! # gaze-metrics
//!
//! Gaze heatmaps and region-of-interest engagement metrics for eye-tracking
//! studies where observers read medical images.
//!
//! The crate provides two independent, pure computations:
//! - **Heatmaps**: weighted Gaussian footprints of fixations accumulated over
//!   a display-sized canvas, clipped at the edges, with an optional display
//!   threshold that hides low-intensity spread
//! - **Engagement metrics**: raw gaze samples classified against an annotated
//!   ellipse and summarized for the whole trial and its three temporal thirds
//!   (diagnosis duration, log gaze density, mean pupil size)
//!
//! Loading recordings, resolving display sizes and writing images or tables
//! are left to the calling driver.
//!
//! ## Quick Start
//!
//! ```
//! use gaze_metrics::{accumulate, analyze, CanvasSize, Ellipse, Point, RawSample};
//!
//! // Duration-weighted heatmap of two fixations
//! let points = [Point::new(400.0, 300.0), Point::new(420.0, 310.0)];
//! let heatmap = accumulate(&points, &[180.0, 240.0], CanvasSize::new(800, 600))?;
//! assert!(heatmap.peak() > 240.0);
//!
//! // Engagement with an annotated finding
//! let samples: Vec<RawSample> = (0..3000)
//!     .map(|i| RawSample::new(400.0 + (i % 50) as f64, 300.0, 4.2))
//!     .collect();
//! let region = Ellipse::new(420.0, 300.0, 40.0, 25.0).with_certainty(4);
//! let metrics = analyze("patient-1", &samples, &region)?;
//! assert_eq!(metrics.diag_duration, 3.0);
//! assert_eq!(metrics.avg_pupil_whole, 4.2);
//! # Ok::<(), gaze_metrics::GazeError>(())
//! ```
//!
//! ## Degenerate segments
//!
//! A segment in which no sample lands inside the region has density
//! `f64::NEG_INFINITY` and average pupil `0.0`. A `log` warning names the
//! trial; the returned metrics are not altered.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod thread_pool;
mod types;

// Functional modules
pub mod batch;
pub mod heatmap;
pub mod output;
pub mod region;
pub mod statistics;

// Re-exports for public API
pub use batch::{accumulate_batch, analyze_batch, HeatmapJob, TrialRegion};
pub use config::{DisplayThreshold, EngagementConfig, HeatmapConfig};
pub use constants::{
    DEFAULT_KERNEL_SIZE, DEFAULT_PUPIL_QUANTILE, DEFAULT_ROUND_DECIMALS, DEFAULT_SAMPLE_PERIOD_S,
    DEFAULT_SD_DIVISOR,
};
pub use error::{GazeError, Result};
pub use heatmap::{high_pupil_fixations, GaussianKernel, HeatmapAccumulator};
pub use region::{segment_ranges, RegionEngagementAnalyzer, Segment, SegmentRanges};
pub use result::{EngagementReport, Heatmap, MetricsResult, SegmentStats};
pub use types::{CanvasSize, Ellipse, Fixation, Grid, HeatmapWeight, Point, RawSample};

/// Rasterize weighted points with the default 200 px kernel.
///
/// The returned [`Heatmap`] carries both the raw grid and the
/// mean-of-positive thresholded display grid. Reuse a
/// [`HeatmapAccumulator`] when rendering many heatmaps to build the kernel
/// only once.
///
/// # Errors
///
/// See [`HeatmapAccumulator::accumulate`].
pub fn accumulate(points: &[Point], weights: &[f64], canvas: CanvasSize) -> Result<Heatmap> {
    HeatmapAccumulator::new().accumulate(points, weights, canvas)
}

/// Compute the nine engagement metrics of one trial against one region.
///
/// # Errors
///
/// See [`RegionEngagementAnalyzer::analyze`].
pub fn analyze(trial_id: &str, samples: &[RawSample], region: &Ellipse) -> Result<MetricsResult> {
    RegionEngagementAnalyzer::new()
        .analyze(trial_id, samples, region)
        .map(|report| report.metrics())
}
