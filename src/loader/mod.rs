//! Catalog loader subsystem for coursedb
//!
//! Parses the comma-delimited course source and populates the catalog in
//! two passes over the same file.
//!
//! # Design Principles
//!
//! - Diagnostics, not failures: malformed lines and unresolved
//!   prerequisites are reported and the load continues (REPORT)
//! - Only an unopenable/unreadable source fails the load (FATAL)
//! - Every load clears the catalog first; no state survives across loads
//! - Deterministic diagnostic order: source order, pass 1 then pass 2

mod diagnostics;
mod errors;
mod load;
mod parser;

pub use diagnostics::Diagnostic;
pub use errors::{LoaderError, LoaderResult};
pub use load::{load_catalog, LoadReport};
pub use parser::split_fields;
