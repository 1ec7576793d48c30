//! String-keyed frequency counter

use serde::Serialize;
use std::collections::HashMap;

/// One grouping key and how many accepted files fell into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub count: usize,
}

/// Occurrence counts per grouping key
///
/// Keys remember the order in which they were first seen; that order breaks
/// ties when entries are sorted by count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<Entry>,
    total: usize,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`, inserting it at zero first if unseen
    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(Entry {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
        self.total += 1;
    }

    /// Count recorded for `key`, zero if it was never seen
    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    /// Entries ordered by ascending count; equal counts keep first-seen order
    pub fn entries(&self) -> Vec<Entry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|entry| entry.count);
        sorted
    }

    /// Entries in first-seen order
    pub fn entries_unsorted(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    /// The larger of `minimum` and the longest key, in characters
    pub fn max_key_length(&self, minimum: usize) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.key.chars().count())
            .fold(minimum, usize::max)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
