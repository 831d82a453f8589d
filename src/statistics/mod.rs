//! Small statistical helpers shared by the heatmap and region pipelines.
//!
//! - Quantile computation using O(n) selection (fixation salience filter)
//! - Fixed-precision rounding and zero-safe means (reported metrics)

mod quantile;
mod rounding;

pub use quantile::compute_quantile;
pub use rounding::{round_to, safe_mean};
