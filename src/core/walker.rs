//! Directory walking functionality
//!
//! Recursive traversal of one root, yielding regular files only. Ignored
//! directories are pruned before they are entered and unreadable entries are
//! skipped without ending the walk.

use crate::core::ignore::IgnoreSet;
use crate::core::source::PathSource;
use crate::error::ResultExt;
use crate::models::config::Settings;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walks a traversal root
pub struct DirectoryWalker<'a> {
    root: PathBuf,
    settings: &'a Settings,
    ignore: &'a IgnoreSet,
}

impl<'a> DirectoryWalker<'a> {
    /// Create a new walker for `root`
    pub fn new(root: impl AsRef<Path>, settings: &'a Settings, ignore: &'a IgnoreSet) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            settings,
            ignore,
        }
    }

    fn build(&self) -> WalkDir {
        let mut walk = WalkDir::new(&self.root)
            .follow_links(self.settings.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.settings.max_depth {
            walk = walk.max_depth(depth);
        }
        walk
    }

    /// Check whether an entry is an excluded directory below the root
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_type().is_dir() && self.ignore.matches(entry.path())
    }
}

impl PathSource for DirectoryWalker<'_> {
    fn label(&self) -> String {
        self.root.display().to_string()
    }

    fn start_message(&self) -> String {
        "collecting files ...".to_string()
    }

    fn paths(&mut self) -> Box<dyn Iterator<Item = PathBuf> + '_> {
        let walker: &Self = self;
        let iter = walker
            .build()
            .into_iter()
            .filter_entry(move |entry| {
                if walker.is_excluded(entry) {
                    debug!("ignoring {}", entry.path().display());
                    false
                } else {
                    true
                }
            })
            .filter_map(|result| {
                let path = match &result {
                    Err(err) => err.path().map(Path::to_path_buf),
                    Ok(_) => None,
                };
                result
                    .with_path_context(path.unwrap_or_default())
                    .map_err(|err| debug!("skipping unreadable entry: {}", err))
                    .ok()
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path);

        Box::new(iter)
    }
}
