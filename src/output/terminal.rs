//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::region::{degenerate_warning, Segment};
use crate::result::{EngagementReport, SegmentStats};

/// Format an engagement report for human-readable terminal output.
pub fn format_report(report: &EngagementReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);
    let region = &report.region;

    output.push_str(&format!("gaze-metrics \u{2502} trial {}\n", report.trial_id));
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Region: {} at ({:.1}, {:.1}), semi-axes {:.1} x {:.1}\n",
        region.legend_label(),
        region.h,
        region.k,
        region.a,
        region.b
    ));
    output.push_str(&format!("  Duration: {:.2} s\n", report.diag_duration));
    output.push('\n');

    output.push_str(&format!(
        "    {:<9} {:>8} {:>8} {:>12} {:>10}\n",
        "Segment", "Inside", "Samples", "Density", "Avg pupil"
    ));
    for segment in Segment::ALL {
        output.push_str(&format_row(segment, report.segment(segment)));
    }
    output.push('\n');

    match degenerate_warning(&report.trial_id, &region.legend_label(), &report.degenerate) {
        Some(warning) => {
            output.push_str(&format!("  {}\n", format!("\u{26A0} {}", warning).yellow().bold()));
        }
        None => {
            output.push_str(&format!("  {}\n", "\u{2713} Gaze reached the region in every segment".green()));
        }
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str("Note: density = ln(inside fraction / region area); -inf means no inside gaze.\n");

    output
}

fn format_row(segment: Segment, stats: &SegmentStats) -> String {
    let density = format_density(stats.density);
    let density = if stats.has_gaze() {
        density.normal()
    } else {
        density.red()
    };
    format!(
        "    {:<9} {:>8} {:>8} {:>12} {:>10.2}\n",
        segment.as_str(),
        stats.inside_count,
        stats.segment_size,
        density,
        stats.avg_pupil
    )
}

/// Render a density, spelling out the no-gaze case.
fn format_density(density: f64) -> String {
    if density == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.3}", density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionEngagementAnalyzer;
    use crate::types::{Ellipse, RawSample};

    fn report(inside_everywhere: bool) -> EngagementReport {
        let samples: Vec<RawSample> = (0..90)
            .map(|i| {
                let x = if inside_everywhere || i < 60 { 100.0 } else { 900.0 };
                RawSample::new(x, 100.0, 2.0)
            })
            .collect();
        let region = Ellipse::new(100.0, 100.0, 20.0, 10.0).with_certainty(5);
        RegionEngagementAnalyzer::new()
            .analyze("p42", &samples, &region)
            .unwrap()
    }

    #[test]
    fn test_format_complete_report() {
        colored::control::set_override(false);
        let output = format_report(&report(true));
        assert!(output.contains("trial p42"));
        assert!(output.contains("Certainty 5"));
        assert!(output.contains("Duration: 0.09 s"));
        assert!(output.contains("Gaze reached the region in every segment"));
    }

    #[test]
    fn test_format_degenerate_report() {
        colored::control::set_override(false);
        let output = format_report(&report(false));
        assert!(output.contains("-inf"));
        assert!(output.contains("no gaze inside region (Certainty 5) during: end"));
    }

    #[test]
    fn test_format_density() {
        assert_eq!(format_density(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_density(-1.23456), "-1.235");
    }
}
