//! Fixation heatmaps.
//!
//! Each fixation stamps a Gaussian footprint, scaled by its duration or pupil
//! size, onto a canvas padded by half a kernel on every side. Overlapping
//! footprints add up, so regions that are revisited or dwelt on get hotter.
//! After cropping back to the canvas the grid is optionally thresholded for
//! display.

mod accumulator;
mod kernel;
mod salience;
mod threshold;

pub use accumulator::HeatmapAccumulator;
pub use kernel::GaussianKernel;
pub use salience::high_pupil_fixations;
pub use threshold::{mask_below, mean_of_positive};
