//! Query rendering for coursedb
//!
//! Derived, read-only views over the catalog: the sorted course listing
//! and the single-course description with resolved prerequisite titles.
//! Rendering never mutates the catalog and never fails: a prerequisite
//! absent from the catalog is flagged inline, not an error.

mod view;

pub use view::{describe_course, list_sorted, CourseView};
