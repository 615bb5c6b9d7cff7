//! CLI-specific error types
//!
//! All CLI errors are FATAL per ERRORS.md: they end the invocation with a
//! non-zero exit. Load diagnostics are not errors and never pass through
//! here.

use std::fmt;
use std::io;

use crate::loader::LoaderError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Course source could not be loaded
    LoadFailed,
    /// Requested course not in the catalog
    CourseNotFound,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "COURSE_CLI_CONFIG_ERROR",
            Self::IoError => "COURSE_CLI_IO_ERROR",
            Self::LoadFailed => "COURSE_CLI_LOAD_FAILED",
            Self::CourseNotFound => "COURSE_CLI_NOT_FOUND",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Load failed
    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::LoadFailed, msg)
    }

    /// Course not found
    pub fn course_not_found(number: &str) -> Self {
        Self::new(
            CliErrorCode::CourseNotFound,
            format!("Course '{}' not found in catalog.", number),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<LoaderError> for CliError {
    fn from(e: LoaderError) -> Self {
        Self::load_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CliError::config_error("bad").code_str(),
            "COURSE_CLI_CONFIG_ERROR"
        );
        assert_eq!(CliError::io_error("bad").code_str(), "COURSE_CLI_IO_ERROR");
        assert_eq!(
            CliError::load_failed("bad").code_str(),
            "COURSE_CLI_LOAD_FAILED"
        );
    }

    #[test]
    fn test_course_not_found_names_course() {
        let err = CliError::course_not_found("CSCI300");
        assert_eq!(err.code_str(), "COURSE_CLI_NOT_FOUND");
        assert!(err.message().contains("CSCI300"));
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("cannot read coursedb.json");
        let display = format!("{}", err);
        assert!(display.contains("COURSE_CLI_CONFIG_ERROR"));
        assert!(display.contains("cannot read coursedb.json"));
    }
}
