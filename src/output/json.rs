//! JSON serialization for engagement results.
//!
//! JSON has no representation for infinities, so `-inf` densities are written
//! as `null` and read back as `-inf`.

use crate::result::{EngagementReport, MetricsResult};

/// Serialize an EngagementReport to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for EngagementReport).
pub fn to_json(report: &EngagementReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize an EngagementReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for EngagementReport).
pub fn to_json_pretty(report: &EngagementReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize only the nine metrics, keyed by column name.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn metrics_to_json(metrics: &MetricsResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(metrics)
}
