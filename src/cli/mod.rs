//! Command-line interface components

pub mod args;
pub mod commands;
pub mod runner;

pub use args::Args;
pub use commands::{Command, InputSource, init_config};
pub use runner::{Runner, run, run_with_progress};
