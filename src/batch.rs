//! Batch evaluation of independent trials.
//!
//! Trials and regions share nothing, so a batch is a plain map over its items.
//! With the `parallel` feature the map runs on the shared pool; results keep
//! input order either way, and one failing item does not affect the others.

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::heatmap::HeatmapAccumulator;
use crate::region::RegionEngagementAnalyzer;
use crate::result::{EngagementReport, Heatmap};
use crate::types::{CanvasSize, Ellipse, Point, RawSample};

/// One trial paired with one region of interest.
#[derive(Debug, Clone, Copy)]
pub struct TrialRegion<'a> {
    /// Identifier used in diagnostics and reports.
    pub trial_id: &'a str,
    /// Ordered raw samples of the trial.
    pub samples: &'a [RawSample],
    /// Region to score the samples against.
    pub region: &'a Ellipse,
}

/// Points and weights to rasterize onto one canvas.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapJob<'a> {
    /// Footprint centers.
    pub points: &'a [Point],
    /// Footprint weights, parallel to `points`.
    pub weights: &'a [f64],
    /// Canvas to rasterize onto.
    pub canvas: CanvasSize,
}

/// Analyze every trial/region pair.
pub fn analyze_batch(
    analyzer: &RegionEngagementAnalyzer,
    items: &[TrialRegion<'_>],
) -> Vec<Result<EngagementReport>> {
    debug!("analyzing {} trial/region pairs", items.len());
    let run = |item: &TrialRegion<'_>| analyzer.analyze(item.trial_id, item.samples, item.region);

    #[cfg(feature = "parallel")]
    let reports: Vec<Result<EngagementReport>> = crate::thread_pool::install(|| items.par_iter().map(run).collect());

    #[cfg(not(feature = "parallel"))]
    let reports: Vec<Result<EngagementReport>> = crate::thread_pool::install(|| items.iter().map(run).collect());

    reports
}

/// Rasterize every job.
pub fn accumulate_batch(accumulator: &HeatmapAccumulator, jobs: &[HeatmapJob<'_>]) -> Vec<Result<Heatmap>> {
    debug!("rasterizing {} heatmaps", jobs.len());
    let run = |job: &HeatmapJob<'_>| accumulator.accumulate(job.points, job.weights, job.canvas);

    #[cfg(feature = "parallel")]
    let heatmaps: Vec<Result<Heatmap>> = crate::thread_pool::install(|| jobs.par_iter().map(run).collect());

    #[cfg(not(feature = "parallel"))]
    let heatmaps: Vec<Result<Heatmap>> = crate::thread_pool::install(|| jobs.iter().map(run).collect());

    heatmaps
}
