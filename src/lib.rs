//! coursedb - a deterministic, in-memory course catalog with an advisor shell
//!
//! Loads a comma-delimited course source into a key-ordered catalog and
//! answers two queries: the full course list in sorted order, and a single
//! course with its resolved prerequisite titles.

pub mod catalog;
pub mod cli;
pub mod loader;
pub mod observability;
pub mod render;
