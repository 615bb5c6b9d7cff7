//! Line splitting for the course source format
//!
//! Per FORMAT.md: fields are separated by commas, each field is trimmed of
//! surrounding whitespace, and there is no quoting or escaping, so a field
//! containing a comma cannot be represented.

/// Split a source line on `,` and trim each token.
///
/// Empty tokens are kept (a trailing comma yields a trailing `""`); the
/// caller decides what an empty token means at its position.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|token| token.trim().to_string()).collect()
}
