//! Region-of-interest engagement metrics.
//!
//! Raw gaze samples of a trial are classified against an annotated ellipse
//! and summarized per temporal segment:
//!
//! 1. **Classification** (`ellipse`): boundary-inclusive point-in-ellipse test
//! 2. **Segmentation** (`segment`): whole trial plus three index-based thirds
//! 3. **Aggregation** (`engagement`): inside counts, log density, mean pupil
//! 4. **Diagnostics** (`diagnostics`): warnings for segments without inside gaze

mod diagnostics;
mod ellipse;
mod engagement;
mod segment;

pub use diagnostics::{degenerate_segments, degenerate_warning};
pub use engagement::{density, RegionEngagementAnalyzer};
pub use segment::{segment_ranges, Segment, SegmentRanges};
