//! Console output formatting
//!
//! Small colored/plain formatter for the confirmation line and the verbose
//! group summary. Color is decided by the caller so output stays plain under
//! `--no-color`, `NO_COLOR`, or a non-terminal stdout.

use crate::sweep::GroupedSweep;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

/// Formats user-facing console output for the plotting run
pub struct SummaryFormatter {
    enable_color: bool,
}

impl SummaryFormatter {
    /// Create a formatter with or without color
    pub fn new(enable_color: bool) -> Self {
        Self { enable_color }
    }

    /// Confirmation line printed after the image is written
    pub fn format_confirmation(&self, output: &Path) -> String {
        let mark = if self.enable_color {
            "✓".green().bold().to_string()
        } else {
            "✓".to_string()
        };
        format!("{} Plot saved to {}", mark, output.display())
    }

    /// Per-group observation counts and SNR spans for verbose mode
    pub fn format_group_summary(&self, groups: &GroupedSweep) -> String {
        let mut summary = String::new();

        let header = format!("Sweep groups ({}):", groups.len());
        if self.enable_color {
            let _ = writeln!(summary, "{}", header.bold());
        } else {
            let _ = writeln!(summary, "{}", header);
        }

        for (bits, observations) in groups {
            let span = match (observations.first(), observations.last()) {
                (Some(first), Some(last)) => {
                    format!("{:.1} dB to {:.1} dB", first.0, last.0)
                }
                _ => "no observations".to_string(),
            };
            let _ = writeln!(
                summary,
                "  n = {} bits: {} points, {}",
                bits,
                observations.len(),
                span
            );
        }

        if groups.is_empty() {
            let _ = writeln!(summary, "  (no measurements; chart will be empty)");
        }

        summary
    }
}
