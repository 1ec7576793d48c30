//! Error context utilities for countext
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use std::path::Path;
use crate::error::{CountextError, ErrorSeverity, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Turn the error into a path access error for `path`
    fn with_path_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| CountextError::Context {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_path_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| CountextError::path_access(path.as_ref(), err.to_string()))
    }
}

/// Handle an error based on its severity
///
/// Warnings and regular errors are printed to stderr and swallowed.
/// Critical errors are printed and handed back to the caller.
pub fn handle_error(err: CountextError) -> Option<CountextError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            eprintln!("Warning: {}", message);
            None
        }
        ErrorSeverity::Error => {
            eprintln!("Error: {}", message);
            None
        }
        ErrorSeverity::Critical => {
            eprintln!("Critical Error: {}", message);
            Some(err)
        }
    }
}
