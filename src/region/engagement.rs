//! Gaze and pupil engagement with a region of interest.

use log::trace;

use super::diagnostics::{degenerate_segments, report_degenerate};
use super::segment::{Segment, SegmentRanges};
use crate::config::EngagementConfig;
use crate::constants::SEGMENT_COUNT;
use crate::error::{GazeError, Result};
use crate::result::{EngagementReport, SegmentStats};
use crate::statistics::{round_to, safe_mean};
use crate::types::{Ellipse, RawSample};

/// Computes engagement metrics of one trial against one ellipse.
///
/// Every raw sample is classified against the region; inside samples are
/// tallied for the whole trial and for the index-based third they fall in.
///
/// # Example
///
/// ```
/// use gaze_metrics::{Ellipse, RawSample, RegionEngagementAnalyzer};
///
/// let samples: Vec<RawSample> = (0..1000)
///     .map(|i| RawSample::new(if i % 2 == 0 { 500.0 } else { 0.0 }, 400.0, 3.0))
///     .collect();
/// let region = Ellipse::new(500.0, 400.0, 50.0, 30.0).with_certainty(3);
///
/// let report = RegionEngagementAnalyzer::new().analyze("p1", &samples, &region).unwrap();
/// assert_eq!(report.diag_duration, 1.0);
/// assert_eq!(report.whole.inside_count, 500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionEngagementAnalyzer {
    config: EngagementConfig,
}

/// Running inside-region totals for one segment.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: usize,
    pupil_sum: f64,
}

impl Tally {
    fn add(&mut self, pupil: f64) {
        self.count += 1;
        self.pupil_sum += pupil;
    }
}

impl RegionEngagementAnalyzer {
    /// Create with 1 kHz sampling and 2-decimal rounding.
    pub fn new() -> Self {
        Self {
            config: EngagementConfig::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: EngagementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &EngagementConfig {
        &self.config
    }

    /// Analyze an ordered sequence of raw samples.
    ///
    /// # Errors
    ///
    /// [`GazeError::InvalidEllipse`] for a bad region and
    /// [`GazeError::TooFewSamples`] for fewer than three samples.
    pub fn analyze(&self, trial_id: &str, samples: &[RawSample], region: &Ellipse) -> Result<EngagementReport> {
        let columns = samples.iter().map(|s| (s.x, s.y, s.pupil_size));
        self.analyze_iter(trial_id, samples.len(), columns, region)
    }

    /// Analyze samples given as parallel `x`, `y` and `pupil` columns.
    ///
    /// # Errors
    ///
    /// As [`analyze`](Self::analyze), plus [`GazeError::LengthMismatch`] when
    /// the columns differ in length.
    pub fn analyze_columns(
        &self,
        trial_id: &str,
        x: &[f64],
        y: &[f64],
        pupil: &[f64],
        region: &Ellipse,
    ) -> Result<EngagementReport> {
        for (what, column) in [("y", y), ("pupil", pupil)] {
            if column.len() != x.len() {
                return Err(GazeError::LengthMismatch {
                    what,
                    expected: x.len(),
                    actual: column.len(),
                });
            }
        }
        let columns = x
            .iter()
            .zip(y)
            .zip(pupil)
            .map(|((&sx, &sy), &sp)| (sx, sy, sp));
        self.analyze_iter(trial_id, x.len(), columns, region)
    }

    fn analyze_iter<I>(&self, trial_id: &str, len: usize, samples: I, region: &Ellipse) -> Result<EngagementReport>
    where
        I: Iterator<Item = (f64, f64, f64)>,
    {
        region.validate()?;
        if len < SEGMENT_COUNT {
            return Err(GazeError::TooFewSamples {
                len,
                min: SEGMENT_COUNT,
            });
        }

        let ranges = SegmentRanges::new(len);
        let mut tallies = [Tally::default(); 4];
        for (idx, (x, y, pupil)) in samples.enumerate() {
            if !region.contains(x, y) {
                continue;
            }
            tallies[Segment::Whole.index()].add(pupil);
            if let Some(third) = ranges.third_of(idx) {
                tallies[third.index()].add(pupil);
            }
        }

        let area = region.area();
        let stats = Segment::ALL.map(|s| self.finish(tallies[s.index()], ranges.size(s), area));
        trace!(
            "trial {}: inside counts {:?} of {} samples",
            trial_id,
            stats.map(|s| s.inside_count),
            len
        );

        let degenerate = degenerate_segments(&stats);
        report_degenerate(trial_id, &region.legend_label(), &degenerate);

        let [whole, initial, middle, end] = stats;
        Ok(EngagementReport {
            trial_id: trial_id.to_string(),
            region: region.clone(),
            diag_duration: round_to(len as f64 * self.config.sample_period_s, self.config.round_decimals),
            whole,
            initial,
            middle,
            end,
            degenerate,
        })
    }

    fn finish(&self, tally: Tally, segment_size: usize, area: f64) -> SegmentStats {
        SegmentStats {
            inside_count: tally.count,
            segment_size,
            pupil_sum: tally.pupil_sum,
            density: density(tally.count, segment_size, area),
            avg_pupil: round_to(safe_mean(tally.pupil_sum, tally.count), self.config.round_decimals),
        }
    }
}

/// `ln((count / segment_size) / area)`.
///
/// No gaze inside the region gives `f64::NEG_INFINITY`, the mathematical
/// limit, rather than a substituted value.
pub fn density(count: usize, segment_size: usize, area: f64) -> f64 {
    ((count as f64 / segment_size as f64) / area).ln()
}
