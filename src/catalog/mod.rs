//! Course catalog subsystem for coursedb
//!
//! The catalog is in-memory-only state, rebuilt from the source file on
//! every load.
//!
//! # Design Principles
//!
//! - Single owner: the catalog holds every `Course`, no external aliasing
//! - Deterministic: BTreeMap key order drives all iteration
//! - Upsert semantics: inserting an existing number replaces the record
//!
//! # Invariants
//!
//! - At most one record per normalized course number
//! - Full iteration is ascending by number, stable across calls

mod course;
mod tree;

pub use course::{normalize_number, Course};
pub use tree::CourseCatalog;
