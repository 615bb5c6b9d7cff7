//! Observability events for coursedb
//!
//! Per OBSERVABILITY.md, every observable lifecycle moment has an explicit
//! typed event. Events carry no payload; variable detail travels in log
//! fields.

use std::fmt;

use super::logger::Severity;

/// Observable events in coursedb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    /// Interactive advisor session begins
    SessionStart,
    /// Interactive advisor session ends
    SessionEnd,

    // Load lifecycle
    /// Load of a course source begins
    LoadStart,
    /// Load complete, catalog populated
    LoadComplete,
    /// Source could not be opened or read
    LoadFailed,
    /// Referential validation pass complete
    ValidationComplete,

    // Queries
    /// A list or describe query was received
    QueryReceived,
    /// A describe query named a course not in the catalog
    CourseNotFound,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",
            Event::LoadStart => "LOAD_START",
            Event::LoadComplete => "LOAD_COMPLETE",
            Event::LoadFailed => "LOAD_FAILED",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::QueryReceived => "QUERY_RECEIVED",
            Event::CourseNotFound => "COURSE_NOT_FOUND",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::LoadFailed => Severity::Error,
            Event::CourseNotFound => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::LoadStart.as_str(), "LOAD_START");
        assert_eq!(Event::LoadComplete.as_str(), "LOAD_COMPLETE");
        assert_eq!(Event::SessionEnd.as_str(), "SESSION_END");
    }

    #[test]
    fn test_event_severities() {
        assert_eq!(Event::LoadFailed.severity(), Severity::Error);
        assert_eq!(Event::CourseNotFound.severity(), Severity::Warn);
        assert_eq!(Event::LoadComplete.severity(), Severity::Info);
    }
}
