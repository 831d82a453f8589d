//! Typed gaze records and common aliases.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{GazeError, Result};

/// Intensity grid, `height` rows by `width` columns, indexed `(y, x)`.
pub type Grid = DMatrix<f64>;

/// A location in canvas (display pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel coordinate, growing rightwards.
    pub x: f64,
    /// Vertical pixel coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which fixation signal weights a heatmap footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatmapWeight {
    /// Fixation duration; longer fixations burn hotter.
    Duration,
    /// Pupil size during the fixation.
    Pupil,
}

/// A fixation ending event as produced by the tracker's event parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixation {
    /// Fixation onset (tracker clock, ms).
    pub start_time: f64,
    /// Fixation offset (tracker clock, ms).
    pub end_time: f64,
    /// Fixation duration (ms).
    pub duration: f64,
    /// Mean pupil size over the fixation.
    pub pupil_size: f64,
    /// Horizontal position in display pixels.
    pub x: f64,
    /// Vertical position in display pixels.
    pub y: f64,
    /// Free-text annotation attached to the fixation (e.g. a dictated word).
    pub label: String,
}

impl Fixation {
    /// Fixation location.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The signal selected by `weight`.
    pub fn weight(&self, weight: HeatmapWeight) -> f64 {
        match weight {
            HeatmapWeight::Duration => self.duration,
            HeatmapWeight::Pupil => self.pupil_size,
        }
    }
}

/// One raw gaze sample. Position in the trial sequence encodes time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Horizontal gaze position in display pixels.
    pub x: f64,
    /// Vertical gaze position in display pixels.
    pub y: f64,
    /// Pupil size (typically area, normalized per observer).
    pub pupil_size: f64,
}

impl RawSample {
    /// Create a raw sample.
    pub fn new(x: f64, y: f64, pupil_size: f64) -> Self {
        Self { x, y, pupil_size }
    }
}

/// An axis-aligned elliptical region of interest.
///
/// Geometry (`area`, `contains`, ...) lives in [`crate::region`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center x.
    pub h: f64,
    /// Center y.
    pub k: f64,
    /// Horizontal semi-axis.
    pub a: f64,
    /// Vertical semi-axis.
    pub b: f64,
    /// Annotator certainty for the finding, display only.
    pub certainty: Option<u8>,
}

impl Ellipse {
    /// Create an ellipse centered at `(h, k)` with semi-axes `a` and `b`.
    pub fn new(h: f64, k: f64, a: f64, b: f64) -> Self {
        Self {
            h,
            k,
            a,
            b,
            certainty: None,
        }
    }

    /// Attach an annotator certainty level.
    pub fn with_certainty(mut self, certainty: u8) -> Self {
        self.certainty = Some(certainty);
        self
    }

    /// Legend text used when the region is drawn over an image.
    pub fn legend_label(&self) -> String {
        match self.certainty {
            Some(c) => format!("Certainty {}", c),
            None => "Certainty n/a".to_string(),
        }
    }

    /// Reject non-positive or non-finite semi-axes.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.a) && ok(self.b) {
            Ok(())
        } else {
            Err(GazeError::InvalidEllipse {
                a: self.a,
                b: self.b,
            })
        }
    }
}

/// Display or image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels (grid columns).
    pub width: usize,
    /// Height in pixels (grid rows).
    pub height: usize,
}

impl CanvasSize {
    /// Create a canvas size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Reject zero-sized canvases.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GazeError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixation() -> Fixation {
        Fixation {
            start_time: 100.0,
            end_time: 350.0,
            duration: 250.0,
            pupil_size: 0.8,
            x: 512.0,
            y: 384.0,
            label: "nodule".to_string(),
        }
    }

    #[test]
    fn test_fixation_weight_selection() {
        let fix = fixation();
        assert_eq!(fix.weight(HeatmapWeight::Duration), 250.0);
        assert_eq!(fix.weight(HeatmapWeight::Pupil), 0.8);
        assert_eq!(fix.point(), Point::new(512.0, 384.0));
    }

    #[test]
    fn test_ellipse_validation() {
        assert!(Ellipse::new(0.0, 0.0, 10.0, 5.0).validate().is_ok());
        assert!(Ellipse::new(0.0, 0.0, 0.0, 5.0).validate().is_err());
        assert!(Ellipse::new(0.0, 0.0, 10.0, -1.0).validate().is_err());
        assert!(Ellipse::new(0.0, 0.0, f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_legend_label() {
        let e = Ellipse::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.legend_label(), "Certainty n/a");
        assert_eq!(e.with_certainty(4).legend_label(), "Certainty 4");
    }

    #[test]
    fn test_canvas_validation() {
        assert!(CanvasSize::new(1024, 768).validate().is_ok());
        assert_eq!(
            CanvasSize::new(0, 768).validate(),
            Err(GazeError::InvalidCanvas {
                width: 0,
                height: 768
            })
        );
    }
}
