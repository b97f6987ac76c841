//! Unit tests for error handling.

use std::{io, path::PathBuf};

use super::errors::Error;

#[test]
fn test_source_unavailable_display() {
    let error = Error::SourceUnavailable {
        path: PathBuf::from("missing.c"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };

    let message = error.to_string();
    assert!(message.contains("missing.c"));
    assert!(message.contains("failed to open source file"));
}

#[test]
fn test_source_unavailable_keeps_io_cause() {
    let error = Error::SourceUnavailable {
        path: PathBuf::from("missing.c"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };

    let source = std::error::Error::source(&error);
    assert!(source.is_some());
}
