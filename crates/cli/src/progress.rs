//! Progress indicators
//!
//! A spinner shown on stderr while a fetch is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for indeterminate progress
///
/// Returns a hidden bar when `visible` is false so callers can drive it the
/// same way in machine-readable output modes.
pub fn spinner(message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.yellow} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        let pb = spinner("Loading Pokémon...", true);
        pb.finish_and_clear();
    }

    #[test]
    fn test_hidden_spinner() {
        let pb = spinner("Loading Pokémon...", false);
        assert!(pb.is_hidden());
        pb.finish_and_clear();
    }
}
