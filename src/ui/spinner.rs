//! Progress spinner shown while probes run.

use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for the collection phase.
///
/// Draws to stderr so the report document keeps stdout to itself; indicatif
/// suppresses drawing on its own when stderr is not a terminal.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show.
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        Self { bar }
    }

    /// Spinner shown only when stderr is interactive.
    ///
    /// The report document owns stdout, so redirecting it does not decide
    /// visibility; a `mwi-doctor > report.txt` run from a terminal still
    /// gets progress on stderr.
    pub fn auto(message: &str) -> Self {
        if Term::stderr().is_term() {
            Self::new(message)
        } else {
            Self::hidden()
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Stop the spinner and erase its line.
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
