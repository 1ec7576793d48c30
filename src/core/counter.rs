//! Per-source counting
//!
//! Glues the filter, the classifier and the frequency counter together and
//! drains a path source into a finished report.

use crate::core::classifier::{base_name, Classifier};
use crate::core::filter::FileFilter;
use crate::core::source::PathSource;
use crate::models::config::Settings;
use crate::models::frequency::FrequencyCounter;
use crate::models::report::Report;
use log::debug;
use std::path::Path;

/// Counts accepted files by grouping key
#[derive(Debug, Clone, Default)]
pub struct FileCounter {
    classifier: Classifier,
    filter: FileFilter,
    counter: FrequencyCounter,
}

impl FileCounter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            classifier: Classifier::from_settings(settings),
            filter: FileFilter::from_settings(settings),
            counter: FrequencyCounter::new(),
        }
    }

    /// Count one path; returns whether it was accepted
    ///
    /// Identical paths pushed twice are counted twice.
    pub fn push(&mut self, path: &Path) -> bool {
        let Some(basename) = base_name(path) else {
            debug!("no file name in {}", path.display());
            return false;
        };

        if !self.filter.accept(&basename) {
            return false;
        }

        let key = self.classifier.classify(&basename);
        self.counter.increment(&key);
        true
    }

    pub fn counter(&self) -> &FrequencyCounter {
        &self.counter
    }

    /// Finish counting and snapshot the result
    pub fn into_report(self, label: impl Into<String>, sort: bool) -> Report {
        Report::from_counter(label, &self.counter, sort)
    }
}

/// Drain `source` into a report
///
/// `on_progress` receives the number of paths seen so far.
pub fn count_source<F>(source: &mut dyn PathSource, settings: &Settings, mut on_progress: F) -> Report
where
    F: FnMut(usize),
{
    let mut counter = FileCounter::new(settings);
    let mut seen = 0;

    for path in source.paths() {
        seen += 1;
        counter.push(&path);
        on_progress(seen);
    }

    debug!(
        "{}: {} of {} paths counted",
        source.label(),
        counter.counter().total(),
        seen
    );
    counter.into_report(source.label(), settings.sort)
}
