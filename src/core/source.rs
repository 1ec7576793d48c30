//! Path sources
//!
//! A source is anything that yields candidate file paths for one report:
//! a directory walk, standard input, or a listing file.

use crate::error::{CountextError, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::{Path, PathBuf};

/// Label used for the report built from standard input
pub const STDIN_LABEL: &str = "(stdin)";

/// Produces the candidate file paths for a single report
pub trait PathSource {
    /// Name printed in the report header
    fn label(&self) -> String;

    /// Diagnostic shown on stderr while the source is consumed
    fn start_message(&self) -> String;

    /// Lazily yield candidate file paths
    fn paths(&mut self) -> Box<dyn Iterator<Item = PathBuf> + '_>;
}

/// Paths read one per line from a reader
///
/// Lines are trimmed (which also drops a trailing `\r`), blank lines are
/// ignored and lines naming an existing directory are skipped. No recursion
/// and no de-duplication happen here.
pub struct LineSource<R> {
    label: String,
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(label: impl Into<String>, reader: R) -> Self {
        Self {
            label: label.into(),
            reader,
        }
    }
}

impl LineSource<StdinLock<'static>> {
    /// Read paths from standard input
    pub fn stdin() -> Self {
        Self::new(STDIN_LABEL, io::stdin().lock())
    }
}

impl LineSource<BufReader<File>> {
    /// Read paths from a listing file
    pub fn listing(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CountextError::listing_read(path, e))?;
        Ok(Self::new(path.display().to_string(), BufReader::new(file)))
    }
}

impl<R: BufRead> PathSource for LineSource<R> {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn start_message(&self) -> String {
        if self.label == STDIN_LABEL {
            "reading paths from stdin ...".to_string()
        } else {
            format!("reading paths from {} ...", self.label)
        }
    }

    fn paths(&mut self) -> Box<dyn Iterator<Item = PathBuf> + '_> {
        Box::new(LinePaths {
            reader: &mut self.reader,
            buf: Vec::new(),
        })
    }
}

struct LinePaths<'a, R> {
    reader: &'a mut R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LinePaths<'_, R> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.buf);
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let path = PathBuf::from(line);
                    if path.is_dir() {
                        debug!("skipping directory {}", path.display());
                        continue;
                    }
                    return Some(path);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("stopped reading paths: {}", e);
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn collect(input: &str) -> Vec<PathBuf> {
        let mut source = LineSource::new(STDIN_LABEL, Cursor::new(input.as_bytes().to_vec()));
        source.paths().collect()
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let paths = collect("a.txt\n\n   \n  b.md  \r\nc\r\n");
        assert_eq!(
            paths,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.md"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(collect("x.rs\ny.rs"), vec![PathBuf::from("x.rs"), PathBuf::from("y.rs")]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(collect("a.txt\na.txt\n").len(), 2);
    }

    #[test]
    fn test_existing_directories_are_skipped() {
        let temp_dir = tempdir().unwrap();
        let sub = temp_dir.path().join("subdir");
        fs::create_dir(&sub).unwrap();

        let input = format!("{}\n{}\n", sub.display(), sub.join("file.rs").display());
        let paths = collect(&input);
        assert_eq!(paths, vec![sub.join("file.rs")]);
    }

    #[test]
    fn test_invalid_utf8_does_not_stop_reading() {
        let mut bytes = b"bad\xffname.txt\n".to_vec();
        bytes.extend_from_slice(b"good.txt\n");
        let mut source = LineSource::new("bytes", Cursor::new(bytes));
        let paths: Vec<_> = source.paths().collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1], PathBuf::from("good.txt"));
    }

    #[test]
    fn test_listing_source() {
        let temp_dir = tempdir().unwrap();
        let listing = temp_dir.path().join("files.txt");
        fs::write(&listing, "one.c\r\ntwo.h\r\n").unwrap();

        let mut source = LineSource::listing(&listing).unwrap();
        assert_eq!(source.label(), listing.display().to_string());
        assert!(source.start_message().contains("files.txt"));
        assert_eq!(source.paths().count(), 2);

        let missing = LineSource::listing(&temp_dir.path().join("missing.txt"));
        assert!(matches!(missing, Err(CountextError::ListingRead { .. })));
    }

    #[test]
    fn test_stdin_label_and_message() {
        let source = LineSource::new(STDIN_LABEL, Cursor::new(Vec::new()));
        assert_eq!(source.label(), "(stdin)");
        assert_eq!(source.start_message(), "reading paths from stdin ...");
    }
}
