//! Tests for error handling system

use super::*;
use std::io;
use std::path::PathBuf;

#[test]
fn test_error_severity() {
    // Skippable per-path problems
    assert_eq!(
        CountextError::path_access("a/b", "permission denied").severity(),
        ErrorSeverity::Warning
    );
    assert_eq!(
        CountextError::listing_read("list.txt", io::Error::new(io::ErrorKind::NotFound, "nope"))
            .severity(),
        ErrorSeverity::Warning
    );

    // Regular errors
    assert_eq!(
        CountextError::io_error(io::Error::new(io::ErrorKind::Other, "boom")).severity(),
        ErrorSeverity::Error
    );

    // Critical errors
    assert_eq!(
        CountextError::config_error("bad").severity(),
        ErrorSeverity::Critical
    );
    assert_eq!(
        CountextError::output_write("out.txt", io::Error::new(io::ErrorKind::Other, "full"))
            .severity(),
        ErrorSeverity::Critical
    );
}

#[test]
fn test_is_critical() {
    assert!(CountextError::ConfigNotFound {
        path: PathBuf::from("missing.toml")
    }
    .is_critical());
    assert!(!CountextError::path_access("x", "y").is_critical());
}

#[test]
fn test_exit_codes() {
    assert_eq!(CountextError::path_access("x", "y").exit_code(), 0);
    assert_eq!(
        CountextError::io_error(io::Error::new(io::ErrorKind::Other, "boom")).exit_code(),
        1
    );
    assert_eq!(CountextError::config_error("bad").exit_code(), 2);
}

#[test]
fn test_user_message() {
    let err = CountextError::ConfigNotFound {
        path: PathBuf::from("custom.toml"),
    };
    assert!(err.user_message().contains("custom.toml"));

    let err = CountextError::config_error("max_depth must be at least 1");
    assert_eq!(
        err.user_message(),
        "Configuration error: max_depth must be at least 1"
    );
}

#[test]
fn test_from_io_error() {
    let err: CountextError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, CountextError::Io { .. }));
}

#[test]
fn test_severity_display() {
    assert_eq!(ErrorSeverity::Warning.to_string(), "WARNING");
    assert_eq!(ErrorSeverity::Error.to_string(), "ERROR");
    assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
}
