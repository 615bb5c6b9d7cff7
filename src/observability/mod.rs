//! Observability subsystem for coursedb
//!
//! Per OBSERVABILITY.md, this module provides:
//! - Structured logging (JSON, stderr)
//! - Typed lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! Core modules (catalog, loader, render) never log; the CLI layer emits
//! events so stdout stays a pure report channel.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::SessionStart);
        log_event(Event::SessionEnd);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::LoadComplete, &[("courses", "3")]);
    }
}
