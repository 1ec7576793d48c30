//! Error handling for countext
//!
//! Error types, the crate-wide result alias and helpers for attaching context.

pub mod context;
#[cfg(test)]
mod tests;
pub mod types;

pub use context::{ResultExt, handle_error};
pub use types::{CountextError, ErrorSeverity, Result};
