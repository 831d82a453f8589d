//! Diagnostics for segments without gaze in the region.
//!
//! A segment with no inside samples yields a `-inf` density. That is a valid
//! result, but usually points at a misaligned annotation or a trial where the
//! observer never looked at the finding, so it is surfaced as a warning.

use log::warn;

use super::segment::Segment;
use crate::result::SegmentStats;

/// Segments (in reporting order) whose inside count is zero.
pub fn degenerate_segments(stats: &[SegmentStats; 4]) -> Vec<Segment> {
    Segment::ALL
        .iter()
        .copied()
        .filter(|s| !stats[s.index()].has_gaze())
        .collect()
}

/// Human-readable warning for a trial with degenerate segments.
pub fn degenerate_warning(trial_id: &str, region_label: &str, degenerate: &[Segment]) -> Option<String> {
    if degenerate.is_empty() {
        return None;
    }
    let names: Vec<&str> = degenerate.iter().map(|s| s.as_str()).collect();
    Some(format!(
        "trial {} has no gaze inside region ({}) during: {}",
        trial_id,
        region_label,
        names.join(", ")
    ))
}

/// Emit the degenerate-segment warning through the `log` facade.
pub(crate) fn report_degenerate(trial_id: &str, region_label: &str, degenerate: &[Segment]) {
    if let Some(message) = degenerate_warning(trial_id, region_label, degenerate) {
        warn!("{}", message);
    }
}
