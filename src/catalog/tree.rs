//! BTreeMap-based ordered course catalog
//!
//! The catalog uses BTreeMap<String, Course> keyed by normalized course
//! number for deterministic ascending iteration. Insert is an upsert: a
//! duplicate key replaces the stored record entirely.

use std::collections::BTreeMap;

use super::course::{normalize_number, Course};

/// Key-ordered container for all loaded courses.
///
/// Single owner of every `Course`; rebuilt from scratch on each load.
///
/// # Invariants
///
/// - At most one record per distinct normalized number
/// - Iteration yields records in ascending number order
/// - Lookup and iteration never mutate the catalog
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<String, Course>,
}

impl CourseCatalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// Insert a course keyed by its normalized number.
    ///
    /// An existing record under the same number is replaced in place,
    /// title and prerequisites included. Always succeeds.
    pub fn insert(&mut self, course: Course) {
        self.courses.insert(course.number.clone(), course);
    }

    /// Exact-match lookup by course number.
    ///
    /// The argument is normalized first, so user input may be any case.
    /// Returns `None` when the number was never inserted.
    pub fn lookup(&self, number: &str) -> Option<&Course> {
        self.courses.get(&normalize_number(number))
    }

    /// All courses in ascending number order.
    ///
    /// Deterministic and stable across repeated calls on an unmodified
    /// catalog (BTreeMap iteration order).
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Remove all records, returning the catalog to its empty state.
    pub fn clear(&mut self) {
        self.courses.clear();
    }

    /// True when no courses are loaded.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of distinct courses held.
    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str, title: &str) -> Course {
        Course::new(number, title, Vec::new())
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = CourseCatalog::new();
        catalog.insert(course("CSCI200", "Intro"));

        let found = catalog.lookup("CSCI200");
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "Intro");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut catalog = CourseCatalog::new();
        catalog.insert(course("CSCI200", "Intro"));

        assert!(catalog.lookup("csci200").is_some());
        assert!(catalog.lookup(" Csci200 ").is_some());
    }

    #[test]
    fn test_lookup_missing() {
        let mut catalog = CourseCatalog::new();
        catalog.insert(course("CSCI200", "Intro"));

        assert!(catalog.lookup("CSCI999").is_none());
    }

    #[test]
    fn test_iteration_ascending() {
        let mut catalog = CourseCatalog::new();

        // Insert out of order
        catalog.insert(course("MATH201", "Applied Linear Algebra"));
        catalog.insert(course("CSCI100", "Introduction to Computer Science"));
        catalog.insert(course("CSCI301", "Advanced Programming"));

        let numbers: Vec<&str> = catalog.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["CSCI100", "CSCI301", "MATH201"]);
    }

    #[test]
    fn test_duplicate_insert_replaces() {
        let mut catalog = CourseCatalog::new();
        catalog.insert(Course::new(
            "CSCI200",
            "Old Title",
            vec!["CSCI100".to_string()],
        ));
        catalog.insert(course("CSCI200", "New Title"));

        assert_eq!(catalog.len(), 1);
        let found = catalog.lookup("CSCI200").unwrap();
        assert_eq!(found.title, "New Title");
        assert!(found.prerequisites.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut catalog = CourseCatalog::new();
        catalog.insert(course("CSCI200", "Intro"));
        assert!(!catalog.is_empty());

        catalog.clear();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.lookup("CSCI200").is_none());
    }
}
