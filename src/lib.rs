//! countext - count files grouped by extension
//!
//! This library walks directory trees (or reads candidate paths from standard
//! input or listing files), groups the files it finds by extension, stem or
//! full name, and renders one frequency table per source.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use error::{CountextError, ErrorSeverity, Result, ResultExt, handle_error};
pub use models::{
    config::{GroupBy, OutputFormat, Settings},
    frequency::FrequencyCounter,
    report::Report,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
