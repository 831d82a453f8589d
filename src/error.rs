//! Error types for structurally invalid input.
//!
//! Numeric edge cases inside otherwise valid input (empty regions, all-zero
//! canvases, footprints outside the display) are not errors; they resolve to
//! documented sentinel values so a batch keeps going past a single odd trial.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GazeError>;

/// Hard failures caused by malformed caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GazeError {
    /// Two parallel sequences have different lengths.
    #[error("{what}: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Which sequence pair disagreed (e.g. "weights", "pupil").
        what: &'static str,
        /// Length of the reference sequence.
        expected: usize,
        /// Length of the offending sequence.
        actual: usize,
    },

    /// Canvas with a zero dimension.
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Ellipse with a non-positive or non-finite semi-axis.
    #[error("ellipse semi-axes must be positive and finite, got a={a}, b={b}")]
    InvalidEllipse {
        /// Horizontal semi-axis.
        a: f64,
        /// Vertical semi-axis.
        b: f64,
    },

    /// Too few raw samples to form three temporal segments.
    #[error("at least {min} raw samples are required, got {len}")]
    TooFewSamples {
        /// Number of samples supplied.
        len: usize,
        /// Minimum accepted.
        min: usize,
    },

    /// Configuration value outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
