//! Two-pass catalog load
//!
//! Per FORMAT.md:
//! - Pass 1 parses each line into a `Course` and inserts it
//! - Pass 2 re-reads the same source and checks every declared
//!   prerequisite against the fully populated catalog
//!
//! The source is read twice so unresolved-prerequisite diagnostics stay
//! keyed to source lines, in source order. Catalogs are small and loads
//! are interactive, so the second sequential pass is cheap.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::catalog::{normalize_number, Course, CourseCatalog};

use super::diagnostics::Diagnostic;
use super::errors::{LoaderError, LoaderResult};
use super::parser::split_fields;

/// Outcome of a successful load: the source opened and was fully scanned.
///
/// Malformed lines and unresolved prerequisites do not fail the load; they
/// are reported here.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of lines that parsed into a course (duplicates included)
    pub loaded: usize,
    /// All findings, in source order: pass-1 line findings, then pass-2
    /// prerequisite findings
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// True when the load produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Load a course source into the catalog, replacing its prior contents.
///
/// The catalog is cleared before the source is opened, so no partial prior
/// state survives any outcome; a failed open leaves it empty.
///
/// Returns `Ok(LoadReport)` whenever the source could be opened and read;
/// `Err(SourceUnavailable)` only when it could not.
pub fn load_catalog(path: &Path, catalog: &mut CourseCatalog) -> LoaderResult<LoadReport> {
    catalog.clear();

    let mut report = LoadReport::default();

    parse_pass(path, catalog, &mut report)?;
    validate_pass(path, catalog, &mut report.diagnostics)?;

    Ok(report)
}

fn open_source(path: &Path) -> LoaderResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| LoaderError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

/// Pass 1: parse every non-empty line, insert what parses, record what
/// does not.
fn parse_pass(
    path: &Path,
    catalog: &mut CourseCatalog,
    report: &mut LoadReport,
) -> LoaderResult<()> {
    let reader = open_source(path)?;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let raw = line.map_err(|e| read_failed(path, catalog, e))?;

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let tokens = split_fields(line);
        if tokens.len() < 2 {
            report
                .diagnostics
                .push(Diagnostic::MalformedLine { line: line_number });
            continue;
        }

        let number = normalize_number(&tokens[0]);
        if number.is_empty() {
            report
                .diagnostics
                .push(Diagnostic::MissingCourseNumber { line: line_number });
            continue;
        }

        let title = tokens[1].clone();
        if title.is_empty() {
            report
                .diagnostics
                .push(Diagnostic::MissingCourseTitle { line: line_number });
            continue;
        }

        // Empty trailing tokens (e.g. from a trailing comma) are dropped.
        let prerequisites: Vec<String> = tokens[2..]
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| normalize_number(t))
            .collect();

        catalog.insert(Course::new(number, title, prerequisites));
        report.loaded += 1;
    }

    Ok(())
}

/// Pass 2: re-read the source and look up every declared prerequisite in
/// the populated catalog. Lines already reported as malformed are skipped;
/// this pass never mutates the catalog.
fn validate_pass(
    path: &Path,
    catalog: &mut CourseCatalog,
    diagnostics: &mut Vec<Diagnostic>,
) -> LoaderResult<()> {
    let reader = open_source(path)?;

    for line in reader.lines() {
        let raw = line.map_err(|e| read_failed(path, catalog, e))?;

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let tokens = split_fields(line);
        if tokens.len() < 2 {
            continue; // already reported in pass 1
        }

        let course = normalize_number(&tokens[0]);

        for token in &tokens[2..] {
            if token.is_empty() {
                continue;
            }
            let prerequisite = normalize_number(token);
            if catalog.lookup(&prerequisite).is_none() {
                diagnostics.push(Diagnostic::UnresolvedPrerequisite {
                    course: course.clone(),
                    prerequisite,
                });
            }
        }
    }

    Ok(())
}

/// A read failure mid-stream clears the catalog so the caller never
/// observes a half-loaded state.
fn read_failed(path: &Path, catalog: &mut CourseCatalog, e: std::io::Error) -> LoaderError {
    catalog.clear();
    LoaderError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    }
}
