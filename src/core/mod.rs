//! Core functionality: path sources, classification and counting

pub mod classifier;
pub mod counter;
pub mod filter;
pub mod ignore;
pub mod source;
pub mod walker;

pub use classifier::Classifier;
pub use counter::{FileCounter, count_source};
pub use filter::FileFilter;
pub use ignore::IgnoreSet;
pub use source::{LineSource, PathSource, STDIN_LABEL};
pub use walker::DirectoryWalker;
