//! Terminal output utilities
//!
//! Status messages go to stderr so stdout carries only the rendered page.

use owo_colors::OwoColorize;
use std::io::Write;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message.dimmed());
    }

    /// Print the interactive search prompt without a trailing newline
    pub fn prompt(label: &str) {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{} ", format!("{label}>").yellow().bold());
        let _ = stderr.flush();
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}
