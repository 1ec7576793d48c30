//! Directory exclusion during traversal

use crate::error::{CountextError, Result};
use glob::Pattern;
use log::warn;
use std::path::Path;

/// Prefix marking an ignore entry as a glob pattern
pub const GLOB_PREFIX: &str = "glob:";

/// Configured directories that are never descended into
///
/// Entries match a directory's base name or its full walked path exactly,
/// whatever characters they contain. Only entries written as `glob:<pattern>`
/// are glob patterns tested against the same two strings.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    literals: Vec<String>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Build from configured entries, failing only on empty ones
    ///
    /// A `glob:` entry whose pattern does not compile is matched literally.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for entry in entries {
            let entry = normalize(entry.as_ref());
            if entry.is_empty() {
                return Err(CountextError::config_error("Empty ignore entry"));
            }

            match entry.strip_prefix(GLOB_PREFIX).map(normalize) {
                Some("") => return Err(CountextError::config_error("Empty ignore pattern")),
                Some(pattern) => match Pattern::new(pattern) {
                    Ok(compiled) => set.patterns.push(compiled),
                    Err(err) => {
                        warn!("ignore pattern '{}' is not a valid glob ({}), matching it literally", pattern, err);
                        set.literals.push(pattern.to_string());
                    }
                },
                None => set.literals.push(entry.to_string()),
            }
        }

        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.patterns.is_empty()
    }

    /// Check whether a directory path is excluded
    pub fn matches(&self, path: &Path) -> bool {
        if self.is_empty() {
            return false;
        }

        let full = path.to_string_lossy();
        let full = normalize(&full);
        let base = path.file_name().map(|name| name.to_string_lossy());
        let base = base.as_deref();

        self.literals
            .iter()
            .any(|literal| literal == full || Some(literal.as_str()) == base)
            || self
                .patterns
                .iter()
                .any(|pattern| pattern.matches(full) || base.is_some_and(|b| pattern.matches(b)))
    }
}

/// Strip trailing separators so `build/` and `build` behave the same
fn normalize(entry: &str) -> &str {
    let trimmed = entry.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !entry.is_empty() {
        // keep a bare root such as "/"
        &entry[..1]
    } else {
        trimmed
    }
}
