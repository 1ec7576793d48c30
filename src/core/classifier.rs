//! Grouping key derivation
//!
//! Turns a file's base name into the key it is counted under.

use crate::models::config::{GroupBy, Settings};
use std::borrow::Cow;
use std::path::Path;

/// Final path segment as text, `None` for paths like `/` or `a/..`
pub fn base_name(path: &Path) -> Option<Cow<'_, str>> {
    path.file_name().map(|name| name.to_string_lossy())
}

/// Extension of `basename` including the leading dot
///
/// A leading dot does not start an extension and a trailing dot yields none,
/// so `.bashrc` and `notes.` both have no extension.
pub fn extension(basename: &str) -> Option<&str> {
    match basename.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < basename.len() => Some(&basename[pos..]),
        _ => None,
    }
}

/// `basename` without its final extension
pub fn stem(basename: &str) -> &str {
    match basename.rfind('.') {
        Some(pos) if pos > 0 => &basename[..pos],
        _ => basename,
    }
}

/// Maps base names to grouping keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    mode: GroupBy,
    case_insensitive: bool,
}

impl Classifier {
    pub fn new(mode: GroupBy, case_insensitive: bool) -> Self {
        Self {
            mode,
            case_insensitive,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.mode, settings.case_insensitive)
    }

    /// Grouping key for `basename`
    ///
    /// Dot-files are never split and always count under their full name.
    /// In extension mode a name without an extension counts under itself,
    /// so every key is non-empty.
    pub fn classify(&self, basename: &str) -> String {
        let key = if basename.starts_with('.') {
            basename
        } else {
            match self.mode {
                GroupBy::Extension => extension(basename).unwrap_or(basename),
                GroupBy::Stem => stem(basename),
                GroupBy::Filename => basename,
            }
        };

        if self.case_insensitive {
            key.to_lowercase()
        } else {
            key.to_string()
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(GroupBy::Extension, false)
    }
}
