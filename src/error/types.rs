//! Error types and definitions for countext
//!
//! Almost every failure during counting is a per-path problem that is skipped.
//! The variants here cover the few things that can actually stop a run:
//! configuration, output destinations and listing files.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for countext operations
#[derive(Debug, Error)]
pub enum CountextError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A path could not be read during traversal
    #[error("Cannot access {path}: {message}")]
    PathAccess { path: PathBuf, message: String },

    /// A listing file could not be opened or read
    #[error("Failed to read listing file {path}: {source}")]
    ListingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {message}")]
    CsvSerialize { message: String },

    /// Error wrapped with a caller supplied description
    #[error("{message}")]
    Context { message: String },
}

impl CountextError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            CountextError::PathAccess { .. } => ErrorSeverity::Warning,
            CountextError::ListingRead { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            CountextError::Config { .. } => ErrorSeverity::Critical,
            CountextError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            CountextError::ConfigRead { .. } => ErrorSeverity::Critical,
            CountextError::ConfigParse { .. } => ErrorSeverity::Critical,
            CountextError::OutputWrite { .. } => ErrorSeverity::Critical,
            CountextError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CountextError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Check the --config path or drop the option.", path.display())
            }
            CountextError::ConfigParse { path, source } => {
                format!("Invalid TOML in '{}': {}. Please check the file format.", path.display(), source)
            }
            CountextError::ListingRead { path, source } => {
                format!("Cannot read listing file '{}': {}. Skipping it.", path.display(), source)
            }
            CountextError::OutputWrite { path, source } => {
                format!("Cannot write to '{}': {}. Check that the directory exists and is writable.", path.display(), source)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Exit code the binary should use when this error ends the run
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Warning => 0,
            ErrorSeverity::Error => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        CountextError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        CountextError::Config {
            message: message.into(),
        }
    }

    /// Create a path access error
    pub fn path_access(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CountextError::PathAccess {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a listing read error
    pub fn listing_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CountextError::ListingRead {
            path: path.into(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CountextError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for CountextError {
    fn from(err: std::io::Error) -> Self {
        CountextError::io_error(err)
    }
}

impl From<serde_json::Error> for CountextError {
    fn from(err: serde_json::Error) -> Self {
        CountextError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for CountextError {
    fn from(err: csv::Error) -> Self {
        CountextError::CsvSerialize {
            message: err.to_string(),
        }
    }
}

/// Result type alias for countext operations
pub type Result<T> = std::result::Result<T, CountextError>;
