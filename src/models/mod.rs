//! Data models and structures for countext

pub mod config;
pub mod frequency;
pub mod report;

pub use config::{GroupBy, OutputFormat, PartialSettings, Settings};
pub use frequency::{Entry, FrequencyCounter};
pub use report::Report;
