//! Rendering of engagement reports for drivers.

pub mod json;
pub mod terminal;

pub use json::{metrics_to_json, to_json, to_json_pretty};
pub use terminal::format_report;
