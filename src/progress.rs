//! Console progress for long jpackage runs
//!
//! Provides a spinner that keeps ticking while jpackage works and prints each
//! relayed line above itself using indicatif.

use crate::runner::{OutputSink, Stream};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Style presets for the spinner and its final state
pub struct ProgressStyles;

impl ProgressStyles {
    /// Style for indeterminate operations (spinner only)
    pub fn spinner() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }

    /// Style for success message
    pub fn success() -> ProgressStyle {
        ProgressStyle::with_template("{prefix:.green} {msg}").unwrap()
    }

    /// Style for error message
    pub fn error() -> ProgressStyle {
        ProgressStyle::with_template("{prefix:.red} {msg}").unwrap()
    }
}

/// Helper trait for progress bar operations
pub trait ProgressExt {
    /// Finish with a success message
    fn finish_success(&self, msg: &str);

    /// Finish with an error message
    fn finish_error(&self, msg: &str);
}

impl ProgressExt for ProgressBar {
    fn finish_success(&self, msg: &str) {
        self.set_style(ProgressStyles::success());
        self.set_prefix("✓");
        self.finish_with_message(msg.to_string());
    }

    fn finish_error(&self, msg: &str) {
        self.set_style(ProgressStyles::error());
        self.set_prefix("✗");
        self.finish_with_message(msg.to_string());
    }
}

/// Create a simple spinner for quick operations
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyles::spinner());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Output sink that prints child lines above a running spinner
pub struct SpinnerSink {
    bar: ProgressBar,
}

impl SpinnerSink {
    /// Start a spinner with `msg`
    pub fn new(msg: &str) -> Self {
        Self { bar: spinner(msg) }
    }

    /// Wrap an existing progress bar
    pub fn from_bar(bar: ProgressBar) -> Self {
        Self { bar }
    }

    /// Underlying progress bar
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Stop the spinner with a success mark
    pub fn finish_success(&self, msg: &str) {
        self.bar.finish_success(msg);
    }

    /// Stop the spinner with an error mark
    pub fn finish_error(&self, msg: &str) {
        self.bar.finish_error(msg);
    }
}

impl OutputSink for SpinnerSink {
    fn line(&self, _stream: Stream, line: &str) {
        self.bar.println(line);
    }

    fn status(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}
