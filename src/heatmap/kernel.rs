//! Square Gaussian footprint stamped once per fixation.

use crate::types::Grid;

/// Precomputed 2D Gaussian with peak value 1.0 at `(size / 2, size / 2)`.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    size: usize,
    sd: f64,
    values: Grid,
}

impl GaussianKernel {
    /// Build a `size x size` kernel with standard deviation `sd` on both axes.
    ///
    /// `kernel[(j, i)] = exp(-((i - c)^2 + (j - c)^2) / (2 sd^2))` with `c = size / 2`.
    pub fn new(size: usize, sd: f64) -> Self {
        let center = (size / 2) as f64;
        let two_var = 2.0 * sd * sd;
        let values = Grid::from_fn(size, size, |row, col| {
            let dx = col as f64 - center;
            let dy = row as f64 - center;
            (-(dx * dx + dy * dy) / two_var).exp()
        });
        Self { size, sd, values }
    }

    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Standard deviation in pixels.
    pub fn sd(&self) -> f64 {
        self.sd
    }

    /// Offset from the kernel's top-left corner to its peak, on both axes.
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Kernel weights, indexed `(row, col)`.
    pub fn values(&self) -> &Grid {
        &self.values
    }

    /// Sum of all kernel weights (mass of an unclipped unit footprint).
    pub fn mass(&self) -> f64 {
        self.values.sum()
    }
}
