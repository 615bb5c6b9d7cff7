//! Read-only query views over the catalog

use crate::catalog::CourseCatalog;

/// One `"<number>, <title>"` line per course, ascending by number.
pub fn list_sorted(catalog: &CourseCatalog) -> Vec<String> {
    catalog
        .iter()
        .map(|course| format!("{}, {}", course.number, course.title))
        .collect()
}

/// A single course prepared for display, prerequisite titles resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    /// `"<number> - <title>"`
    pub header: String,
    /// One entry per declared prerequisite, in source order:
    /// `"<number> - <title>"` when the prerequisite is in the catalog,
    /// `"<number> (missing from catalog)"` when it is not
    pub prerequisites: Vec<String>,
}

impl CourseView {
    /// Full text block: header, then `Prerequisites: None` or a
    /// `Prerequisites:` section with one indented line each.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![self.header.clone()];

        if self.prerequisites.is_empty() {
            lines.push("Prerequisites: None".to_string());
        } else {
            lines.push("Prerequisites:".to_string());
            for p in &self.prerequisites {
                lines.push(format!("  {}", p));
            }
        }

        lines
    }
}

/// Look up a course and resolve its prerequisite titles.
///
/// The raw number is normalized before lookup. Returns `None` when the
/// course is not in the catalog. A prerequisite missing from the catalog
/// still renders (flagged inline); this never fails.
pub fn describe_course(catalog: &CourseCatalog, raw_number: &str) -> Option<CourseView> {
    let course = catalog.lookup(raw_number)?;

    let prerequisites = course
        .prerequisites
        .iter()
        .map(|number| match catalog.lookup(number) {
            Some(p) => format!("{} - {}", p.number, p.title),
            None => format!("{} (missing from catalog)", number),
        })
        .collect();

    Some(CourseView {
        header: format!("{} - {}", course.number, course.title),
        prerequisites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    fn sample_catalog() -> CourseCatalog {
        let mut catalog = CourseCatalog::new();
        catalog.insert(Course::new(
            "CSCI100",
            "Introduction to Computer Science",
            Vec::new(),
        ));
        catalog.insert(Course::new(
            "CSCI200",
            "Intro to Algorithms",
            vec!["CSCI100".to_string(), "CSCI999".to_string()],
        ));
        catalog
    }

    #[test]
    fn test_list_sorted_format_and_order() {
        let lines = list_sorted(&sample_catalog());
        assert_eq!(
            lines,
            vec![
                "CSCI100, Introduction to Computer Science",
                "CSCI200, Intro to Algorithms",
            ]
        );
    }

    #[test]
    fn test_describe_resolves_and_flags_prerequisites() {
        let view = describe_course(&sample_catalog(), "csci200").unwrap();

        assert_eq!(view.header, "CSCI200 - Intro to Algorithms");
        assert_eq!(
            view.prerequisites,
            vec![
                "CSCI100 - Introduction to Computer Science",
                "CSCI999 (missing from catalog)",
            ]
        );
    }

    #[test]
    fn test_describe_missing_course() {
        assert!(describe_course(&sample_catalog(), "CSCI777").is_none());
    }

    #[test]
    fn test_describe_on_empty_catalog() {
        let catalog = CourseCatalog::new();
        assert!(describe_course(&catalog, "CSCI100").is_none());
    }

    #[test]
    fn test_render_lines_no_prerequisites() {
        let view = describe_course(&sample_catalog(), "CSCI100").unwrap();
        assert_eq!(
            view.render_lines(),
            vec![
                "CSCI100 - Introduction to Computer Science",
                "Prerequisites: None",
            ]
        );
    }

    #[test]
    fn test_render_lines_with_prerequisites() {
        let view = describe_course(&sample_catalog(), "CSCI200").unwrap();
        assert_eq!(
            view.render_lines(),
            vec![
                "CSCI200 - Intro to Algorithms",
                "Prerequisites:",
                "  CSCI100 - Introduction to Computer Science",
                "  CSCI999 (missing from catalog)",
            ]
        );
    }
}
