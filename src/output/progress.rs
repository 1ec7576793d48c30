//! Progress reporting functionality
//!
//! A cosmetic spinner on stderr while a source is drained. It never writes to
//! stdout and is cleared before the report for that source is printed.

use crate::models::config::Settings;
use ansi_term::Colour::Cyan;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Prefix of every diagnostic line
pub const TAG: &str = "[countext]";

/// Progress reporter for one run
pub struct ProgressReporter {
    verbose: bool,
    spinner_enabled: bool,
    tag: String,
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for the given settings
    pub fn new(settings: &Settings) -> Self {
        let stderr_tty = io::stderr().is_terminal();
        Self::with_terminal(settings, stderr_tty)
    }

    /// Create a reporter as if stderr were (or were not) a terminal
    pub fn with_terminal(settings: &Settings, stderr_tty: bool) -> Self {
        let tag = if settings.use_colors && stderr_tty {
            Cyan.bold().paint(TAG).to_string()
        } else {
            TAG.to_string()
        };

        Self {
            verbose: settings.verbose,
            spinner_enabled: !settings.verbose && settings.show_progress && stderr_tty,
            tag,
            spinner: None,
        }
    }

    /// Announce a source; starts the spinner when enabled
    pub fn start(&mut self, message: &str) {
        let line = format!("{} {}", self.tag, message);

        if !self.spinner_enabled {
            eprintln!("{}", line);
            return;
        }

        let style = ProgressStyle::default_spinner()
            .template("{msg} {pos} {spinner:.green}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(line);
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    /// Update the number of paths seen so far
    pub fn update(&self, seen: usize) {
        if let Some(spinner) = &self.spinner {
            spinner.set_position(seen as u64);
        }
    }

    /// Clear the spinner; in verbose mode also print `summary`
    pub fn finish(&mut self, summary: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }

        if self.verbose {
            eprintln!("{} {}", self.tag, summary);
        }
    }

    /// Check if the spinner will be drawn
    pub fn is_spinner_enabled(&self) -> bool {
        self.spinner_enabled
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
