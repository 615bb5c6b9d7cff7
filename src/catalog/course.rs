//! Course record type and course-number normalization
//!
//! Per FORMAT.md:
//! - Course numbers are case-insensitive in source files and user input
//! - Internally they are always stored uppercase
//! - Prerequisites keep the order they appear in on the source line

/// Normalize a raw course number for storage and lookup.
///
/// Trims surrounding whitespace and uppercases, so `" csci200 "` and
/// `"CSCI200"` address the same record.
pub fn normalize_number(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A single course: the catalog's unit of storage.
///
/// The number is the unique key; prerequisites are stored as raw course
/// numbers (normalized, file order, duplicates allowed) and are not
/// guaranteed to resolve to loaded courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Normalized course number, e.g. `CSCI200`
    pub number: String,
    /// Human-readable title, e.g. `Intro to Algorithms`
    pub title: String,
    /// Prerequisite course numbers in source order
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Create a course, normalizing the number and every prerequisite.
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: normalize_number(&number.into()),
            title: title.into(),
            prerequisites: prerequisites
                .iter()
                .map(|p| normalize_number(p))
                .collect(),
        }
    }

    /// True when the course declares no prerequisites.
    pub fn has_no_prerequisites(&self) -> bool {
        self.prerequisites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_trims() {
        assert_eq!(normalize_number(" csci200 "), "CSCI200");
        assert_eq!(normalize_number("MATH101"), "MATH101");
        assert_eq!(normalize_number(""), "");
    }

    #[test]
    fn test_new_normalizes_number_and_prerequisites() {
        let course = Course::new(
            "csci300",
            "Data Structures",
            vec!["csci200".to_string(), " math101 ".to_string()],
        );

        assert_eq!(course.number, "CSCI300");
        assert_eq!(course.title, "Data Structures");
        assert_eq!(course.prerequisites, vec!["CSCI200", "MATH101"]);
    }

    #[test]
    fn test_prerequisite_order_preserved() {
        let course = Course::new(
            "CSCI400",
            "Large Software Development",
            vec!["CSCI301".to_string(), "CSCI350".to_string()],
        );

        assert_eq!(course.prerequisites, vec!["CSCI301", "CSCI350"]);
        assert!(!course.has_no_prerequisites());
    }
}
