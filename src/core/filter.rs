//! Acceptance test applied before classification

use crate::models::config::Settings;

/// Rejects extension-less files when `ignore_noext` is configured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileFilter {
    ignore_noext: bool,
}

impl FileFilter {
    pub fn new(ignore_noext: bool) -> Self {
        Self { ignore_noext }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ignore_noext)
    }

    /// Whether a file with this base name should be counted
    ///
    /// Any '.' anywhere in the name is enough, including a dot-file's leading one.
    pub fn accept(&self, basename: &str) -> bool {
        !self.ignore_noext || basename.contains('.')
    }
}
