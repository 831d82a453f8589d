//! Result types for heatmaps and region engagement.

use serde::{Deserialize, Serialize};

use crate::config::DisplayThreshold;
use crate::region::Segment;
use crate::types::{Ellipse, Grid};

/// Accumulated gaze intensity over one canvas.
///
/// Holds both the raw grid and the display grid; the latter differs only by
/// the configured [`DisplayThreshold`] post-process.
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub(crate) raw: Grid,
    pub(crate) display: Grid,
    pub(crate) lowbound: Option<f64>,
    pub(crate) threshold: DisplayThreshold,
}

impl Heatmap {
    /// Raw additive intensity, `height` rows by `width` columns.
    pub fn raw(&self) -> &Grid {
        &self.raw
    }

    /// Thresholded grid for rendering; masked cells are `NaN`.
    pub fn display(&self) -> &Grid {
        &self.display
    }

    /// Cut-off used for the display grid, if thresholding took place.
    pub fn lowbound(&self) -> Option<f64> {
        self.lowbound
    }

    /// Post-process that produced the display grid.
    pub fn threshold(&self) -> DisplayThreshold {
        self.threshold
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.raw.ncols()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.raw.nrows()
    }

    /// Raw intensity at pixel `(x, y)`, `None` outside the canvas.
    pub fn value_at(&self, x: usize, y: usize) -> Option<f64> {
        self.raw.get((y, x)).copied()
    }

    /// Largest raw intensity (0.0 for an empty heatmap).
    pub fn peak(&self) -> f64 {
        self.raw.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of all raw intensity on the canvas.
    pub fn total_mass(&self) -> f64 {
        self.raw.sum()
    }

    /// Split into `(raw, display)` grids.
    pub fn into_parts(self) -> (Grid, Grid) {
        (self.raw, self.display)
    }
}

/// Counts and sums for one temporal segment of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Samples that fell inside the region.
    pub inside_count: usize,
    /// Samples in the segment (full trial length for `Whole`).
    pub segment_size: usize,
    /// Sum of pupil sizes over inside samples.
    pub pupil_sum: f64,
    /// `ln((inside_count / segment_size) / area)`; `-inf` when nothing was inside.
    #[serde(with = "density_serde")]
    pub density: f64,
    /// Mean inside pupil size, rounded; `0.0` when nothing was inside.
    pub avg_pupil: f64,
}

impl SegmentStats {
    /// Whether any sample of this segment landed in the region.
    pub fn has_gaze(&self) -> bool {
        self.inside_count > 0
    }

    /// Fraction of the segment's samples that were inside the region.
    pub fn inside_fraction(&self) -> f64 {
        if self.segment_size == 0 {
            0.0
        } else {
            self.inside_count as f64 / self.segment_size as f64
        }
    }
}

/// Full engagement analysis of one trial against one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementReport {
    /// Trial identifier supplied by the caller.
    pub trial_id: String,
    /// Region the samples were classified against.
    pub region: Ellipse,
    /// Diagnosis duration in seconds, rounded.
    pub diag_duration: f64,
    /// Whole-trial statistics.
    pub whole: SegmentStats,
    /// First third.
    pub initial: SegmentStats,
    /// Second third.
    pub middle: SegmentStats,
    /// Final third.
    pub end: SegmentStats,
    /// Segments with no gaze inside the region.
    pub degenerate: Vec<Segment>,
}

impl EngagementReport {
    /// Statistics for `segment`.
    pub fn segment(&self, segment: Segment) -> &SegmentStats {
        match segment {
            Segment::Whole => &self.whole,
            Segment::Initial => &self.initial,
            Segment::Middle => &self.middle,
            Segment::End => &self.end,
        }
    }

    /// True when every segment saw gaze inside the region.
    pub fn is_complete(&self) -> bool {
        self.degenerate.is_empty()
    }

    /// The nine reported scalars.
    pub fn metrics(&self) -> MetricsResult {
        MetricsResult {
            diag_duration: self.diag_duration,
            density_whole: self.whole.density,
            density_initial: self.initial.density,
            density_middle: self.middle.density,
            density_end: self.end.density,
            avg_pupil_whole: self.whole.avg_pupil,
            avg_pupil_initial: self.initial.avg_pupil,
            avg_pupil_middle: self.middle.avg_pupil,
            avg_pupil_end: self.end.avg_pupil,
        }
    }
}

/// Densities as JSON numbers, with the no-gaze `-inf` written as `null`.
///
/// JSON has no infinities, so `null` is read back as `f64::NEG_INFINITY`.
mod density_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(density: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if density.is_finite() {
            serializer.serialize_f64(*density)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

/// The nine engagement metrics for one trial/region pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Trial length in seconds, rounded.
    pub diag_duration: f64,
    /// Gaze density in the region over the whole trial.
    #[serde(with = "density_serde")]
    pub density_whole: f64,
    /// Gaze density in the region over the first third.
    #[serde(with = "density_serde")]
    pub density_initial: f64,
    /// Gaze density in the region over the second third.
    #[serde(with = "density_serde")]
    pub density_middle: f64,
    /// Gaze density in the region over the final third.
    #[serde(with = "density_serde")]
    pub density_end: f64,
    /// Mean inside pupil size over the whole trial.
    pub avg_pupil_whole: f64,
    /// Mean inside pupil size over the first third.
    pub avg_pupil_initial: f64,
    /// Mean inside pupil size over the second third.
    pub avg_pupil_middle: f64,
    /// Mean inside pupil size over the final third.
    pub avg_pupil_end: f64,
}

impl MetricsResult {
    /// Column names in [`to_array`](Self::to_array) order.
    pub const COLUMNS: [&'static str; 9] = [
        "diag_duration",
        "density_whole",
        "density_initial",
        "density_middle",
        "density_end",
        "avg_pupil_whole",
        "avg_pupil_initial",
        "avg_pupil_middle",
        "avg_pupil_end",
    ];

    /// Metrics as a flat row for tabular output.
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.diag_duration,
            self.density_whole,
            self.density_initial,
            self.density_middle,
            self.density_end,
            self.avg_pupil_whole,
            self.avg_pupil_initial,
            self.avg_pupil_middle,
            self.avg_pupil_end,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(inside_count: usize, segment_size: usize) -> SegmentStats {
        SegmentStats {
            inside_count,
            segment_size,
            pupil_sum: 0.0,
            density: 0.0,
            avg_pupil: 0.0,
        }
    }

    #[test]
    fn test_inside_fraction() {
        assert_eq!(stats(3, 12).inside_fraction(), 0.25);
        assert_eq!(stats(0, 0).inside_fraction(), 0.0);
        assert!(!stats(0, 5).has_gaze());
    }

    #[test]
    fn test_heatmap_accessors() {
        let raw = Grid::from_row_slice(2, 3, &[0.0, 1.0, 0.5, 2.0, 0.0, 0.0]);
        let heatmap = Heatmap {
            display: raw.clone(),
            raw,
            lowbound: None,
            threshold: DisplayThreshold::None,
        };
        assert_eq!(heatmap.width(), 3);
        assert_eq!(heatmap.height(), 2);
        assert_eq!(heatmap.value_at(0, 1), Some(2.0));
        assert_eq!(heatmap.value_at(3, 0), None);
        assert_eq!(heatmap.peak(), 2.0);
        assert!((heatmap.total_mass() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_row_order() {
        let metrics = MetricsResult {
            diag_duration: 1.0,
            density_whole: 2.0,
            density_initial: 3.0,
            density_middle: 4.0,
            density_end: 5.0,
            avg_pupil_whole: 6.0,
            avg_pupil_initial: 7.0,
            avg_pupil_middle: 8.0,
            avg_pupil_end: 9.0,
        };
        assert_eq!(
            metrics.to_array(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(MetricsResult::COLUMNS[4], "density_end");
    }
}
