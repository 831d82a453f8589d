//! Index-based temporal segmentation of a trial.
//!
//! A trial of `len` samples is split into three contiguous thirds of
//! `n = len / 3` samples each. When `len` is not a multiple of three the
//! trailing `len - 3n` samples belong to no third, while the whole-trial
//! segment still covers all `len` samples.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::SEGMENT_COUNT;

/// A portion of a trial's raw sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Every sample of the trial.
    Whole,
    /// First third.
    Initial,
    /// Second third.
    Middle,
    /// Final third.
    End,
}

impl Segment {
    /// All segments in reporting order.
    pub const ALL: [Segment; 4] = [Segment::Whole, Segment::Initial, Segment::Middle, Segment::End];

    /// The three temporal thirds.
    pub const THIRDS: [Segment; 3] = [Segment::Initial, Segment::Middle, Segment::End];

    /// Position in [`Segment::ALL`].
    pub fn index(self) -> usize {
        match self {
            Segment::Whole => 0,
            Segment::Initial => 1,
            Segment::Middle => 2,
            Segment::End => 3,
        }
    }

    /// Lowercase name for reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Whole => "whole",
            Segment::Initial => "initial",
            Segment::Middle => "middle",
            Segment::End => "end",
        }
    }
}

/// Sample index ranges of every segment for one trial length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRanges {
    len: usize,
    third: usize,
}

impl SegmentRanges {
    /// Ranges for a trial of `len` samples.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            third: len / SEGMENT_COUNT,
        }
    }

    /// Samples per third.
    pub fn third_len(&self) -> usize {
        self.third
    }

    /// Samples in `segment`.
    pub fn size(&self, segment: Segment) -> usize {
        match segment {
            Segment::Whole => self.len,
            _ => self.third,
        }
    }

    /// Index range of `segment`.
    pub fn range(&self, segment: Segment) -> Range<usize> {
        let n = self.third;
        match segment {
            Segment::Whole => 0..self.len,
            Segment::Initial => 0..n,
            Segment::Middle => n..2 * n,
            Segment::End => 2 * n..3 * n,
        }
    }

    /// The third containing sample `idx`, if any.
    pub fn third_of(&self, idx: usize) -> Option<Segment> {
        if self.third == 0 || idx >= SEGMENT_COUNT * self.third {
            return None;
        }
        Some(Segment::THIRDS[idx / self.third])
    }
}

/// Index ranges of the three thirds of a `len`-sample trial.
///
/// Handy for drivers that color raw samples by phase.
pub fn segment_ranges(len: usize) -> [Range<usize>; 3] {
    let ranges = SegmentRanges::new(len);
    Segment::THIRDS.map(|s| ranges.range(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let ranges = SegmentRanges::new(9);
        assert_eq!(ranges.range(Segment::Initial), 0..3);
        assert_eq!(ranges.range(Segment::Middle), 3..6);
        assert_eq!(ranges.range(Segment::End), 6..9);
        assert_eq!(ranges.size(Segment::Whole), 9);
    }

    #[test]
    fn test_trailing_samples_excluded_from_thirds() {
        let ranges = SegmentRanges::new(11);
        assert_eq!(ranges.third_len(), 3);
        assert_eq!(ranges.range(Segment::End), 6..9);
        assert_eq!(ranges.range(Segment::Whole), 0..11);
        assert_eq!(ranges.third_of(8), Some(Segment::End));
        assert_eq!(ranges.third_of(9), None);
        assert_eq!(ranges.third_of(10), None);
    }

    #[test]
    fn test_third_of_follows_ranges() {
        let ranges = SegmentRanges::new(1000);
        for segment in Segment::THIRDS {
            for idx in ranges.range(segment) {
                assert_eq!(ranges.third_of(idx), Some(segment));
            }
        }
    }

    #[test]
    fn test_short_trial_has_empty_thirds() {
        let ranges = SegmentRanges::new(2);
        assert_eq!(ranges.third_len(), 0);
        assert_eq!(ranges.third_of(0), None);
        assert_eq!(segment_ranges(2), [0..0, 0..0, 0..0]);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
        }
    }
}
