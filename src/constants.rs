//! Numeric defaults shared by the heatmap and engagement pipelines.

/// Side length of the square Gaussian kernel in pixels.
pub const DEFAULT_KERNEL_SIZE: usize = 200;

/// Kernel standard deviation is `kernel_size / DEFAULT_SD_DIVISOR`.
pub const DEFAULT_SD_DIVISOR: f64 = 6.0;

/// Raw gaze samples are recorded at 1 kHz.
pub const DEFAULT_SAMPLE_PERIOD_S: f64 = 0.001;

/// Decimal places kept for durations and pupil averages.
pub const DEFAULT_ROUND_DECIMALS: i32 = 2;

/// Quantile above which a fixation's pupil size counts as salient.
pub const DEFAULT_PUPIL_QUANTILE: f64 = 0.75;

/// Number of temporal segments a trial is split into.
pub const SEGMENT_COUNT: usize = 3;
