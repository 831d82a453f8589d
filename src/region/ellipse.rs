//! Point-in-ellipse classification.

use std::f64::consts::PI;

use crate::types::Ellipse;

impl Ellipse {
    /// Area `pi * a * b`.
    pub fn area(&self) -> f64 {
        PI * self.a * self.b
    }

    /// Left-hand side of the ellipse equation, `((x-h)/a)^2 + ((y-k)/b)^2`.
    ///
    /// Values `<= 1` lie inside or on the boundary.
    pub fn equation_value(&self, x: f64, y: f64) -> f64 {
        let dx = (x - self.h) / self.a;
        let dy = (y - self.k) / self.b;
        dx * dx + dy * dy
    }

    /// Whether `(x, y)` is inside the ellipse, boundary inclusive.
    ///
    /// Samples with non-finite coordinates (tracker dropouts) are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.equation_value(x, y) <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inside() {
        let e = Ellipse::new(100.0, 50.0, 20.0, 10.0);
        assert!(e.contains(120.0, 50.0));
        assert!(e.contains(80.0, 50.0));
        assert!(e.contains(100.0, 60.0));
        assert!(e.contains(100.0, 40.0));
        assert!(e.contains(100.0, 50.0));
    }

    #[test]
    fn test_just_past_boundary_is_outside() {
        let e = Ellipse::new(100.0, 50.0, 20.0, 10.0);
        let eps = 1e-9;
        assert!(!e.contains(120.0 + eps, 50.0));
        assert!(!e.contains(100.0, 60.0 + eps));
        // Inside the bounding box but outside the curve
        assert!(!e.contains(118.0, 58.0));
    }

    #[test]
    fn test_dropouts_are_outside() {
        let e = Ellipse::new(0.0, 0.0, 5.0, 5.0);
        assert!(!e.contains(f64::NAN, 0.0));
        assert!(!e.contains(0.0, f64::INFINITY));
    }

    #[test]
    fn test_area() {
        let e = Ellipse::new(0.0, 0.0, 2.0, 3.0);
        assert!((e.area() - 6.0 * PI).abs() < 1e-12);
    }
}
