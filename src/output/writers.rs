//! Output writing functionality
//!
//! This module provides writers for different output destinations.

use crate::error::{CountextError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination and flush it
    fn write(&mut self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug, Default)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&mut self, content: &str) -> Result<()> {
        write_to_pipe(&mut io::stdout().lock(), content)
    }
}

/// Write and flush, treating a closed reader (`countext | head`) as done
pub(crate) fn write_to_pipe<W: Write>(out: &mut W, content: &str) -> Result<()> {
    match out.write_all(content.as_bytes()).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed by reader, dropping remaining output");
            Ok(())
        }
        result => result.map_err(|e| CountextError::StdoutWrite { source: e }),
    }
}

/// Writer for file output
///
/// The file is created (or truncated) once, every write appends to it.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: File,
}

impl FileWriter {
    /// Create the output file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| CountextError::output_write(&path, e))?;
        Ok(Self { path, file })
    }
}

impl OutputWriter for FileWriter {
    fn write(&mut self, content: &str) -> Result<()> {
        self.file
            .write_all(content.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| CountextError::output_write(&self.path, e))
    }
}

/// In-memory sink, handy for embedding and tests
impl OutputWriter for String {
    fn write(&mut self, content: &str) -> Result<()> {
        self.push_str(content);
        Ok(())
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    match output_file {
        Some(path) => Ok(Box::new(FileWriter::create(path)?)),
        None => Ok(Box::new(StdoutWriter)),
    }
}
