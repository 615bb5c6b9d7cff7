//! # Loader Errors
//!
//! Per ERRORS.md, only source unavailability is a hard failure; every
//! malformed-line and unresolved-prerequisite condition travels through
//! [`Diagnostic`](super::Diagnostic) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for load operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Loader errors
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot open course source '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoaderError {
    /// Error code per ERRORS.md
    pub fn code(&self) -> &'static str {
        match self {
            LoaderError::SourceUnavailable { .. } => "COURSE_SOURCE_UNAVAILABLE",
        }
    }

    /// Source-unavailable errors abort the load attempt outright.
    pub fn is_fatal(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_source_unavailable_code() {
        let err = LoaderError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.code(), "COURSE_SOURCE_UNAVAILABLE");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_source_unavailable_display_names_path() {
        let err = LoaderError::SourceUnavailable {
            path: PathBuf::from("courses.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = format!("{}", err);
        assert!(display.contains("courses.txt"));
    }
}
