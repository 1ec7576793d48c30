//! Finished per-source results handed to the formatters

use super::frequency::{Entry, FrequencyCounter};
use serde::Serialize;

/// Minimum key column width used by the text table
pub const MIN_KEY_WIDTH: usize = 13;

/// The counted result for one directory, listing file or stdin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Source directory, listing file or "(stdin)"
    pub label: String,
    /// Number of accepted files
    pub total: usize,
    /// Entries in display order
    pub entries: Vec<Entry>,
    /// Key column width for text output
    #[serde(skip)]
    pub key_width: usize,
}

impl Report {
    /// Snapshot a counter, sorting by ascending count when `sort` is set
    pub fn from_counter(label: impl Into<String>, counter: &FrequencyCounter, sort: bool) -> Self {
        let entries = if sort {
            counter.entries()
        } else {
            counter.entries_unsorted()
        };

        Self {
            label: label.into(),
            total: counter.total(),
            entries,
            key_width: counter.max_key_length(MIN_KEY_WIDTH),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
