//! CLI command implementations
//!
//! The advisor shell is a thin collaborator: it owns the catalog instance,
//! calls the loader and render layers, and displays whatever diagnostics a
//! load returns. All query semantics live below it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::CourseCatalog;
use crate::loader::{load_catalog, LoadReport};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::render::{describe_course, list_sorted};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{prompt, write_line, write_lines};

/// Configuration file structure
///
/// All fields are optional; a missing config file means defaults. A file
/// that exists but cannot be read or parsed is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default course source, offered at the interactive load prompt and
    /// used by one-shot commands when --file is omitted
    #[serde(default)]
    pub catalog_file: Option<String>,
}

impl Config {
    /// Load configuration, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if let Some(file) = &self.catalog_file {
            if file.trim().is_empty() {
                return Err(CliError::config_error("catalog_file must not be empty"));
            }
        }
        Ok(())
    }
}

/// Parse arguments and dispatch. Entry point called from main.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    // No subcommand means the interactive menu with the default config.
    let command = cli.command.unwrap_or(Command::Menu {
        config: PathBuf::from("./coursedb.json"),
    });

    run_command(command)
}

/// Execute a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Menu { config } => {
            let config = Config::load(&config)?;
            menu(&config)
        }
        Command::Load { config, file } => {
            let config = Config::load(&config)?;
            let source = resolve_source(file, &config)?;

            let mut catalog = CourseCatalog::new();
            let report = load_source(&source, &mut catalog)?;
            print_load_report(&report)?;
            Ok(())
        }
        Command::List { config, file } => {
            let config = Config::load(&config)?;
            let source = resolve_source(file, &config)?;

            let mut catalog = CourseCatalog::new();
            load_source(&source, &mut catalog)?;

            log_event_with_fields(Event::QueryReceived, &[("kind", "list")]);
            write_lines(&list_sorted(&catalog))
        }
        Command::Show {
            config,
            file,
            course,
        } => {
            let config = Config::load(&config)?;
            let source = resolve_source(file, &config)?;

            let mut catalog = CourseCatalog::new();
            load_source(&source, &mut catalog)?;

            log_event_with_fields(
                Event::QueryReceived,
                &[("kind", "describe"), ("course", course.as_str())],
            );

            match describe_course(&catalog, &course) {
                Some(view) => write_lines(&view.render_lines()),
                None => {
                    log_event_with_fields(Event::CourseNotFound, &[("course", course.as_str())]);
                    write_line("Course not found.")?;
                    Err(CliError::course_not_found(&course))
                }
            }
        }
    }
}

/// Pick the course source: --file wins, then config, else error.
fn resolve_source(file: Option<PathBuf>, config: &Config) -> CliResult<PathBuf> {
    file.or_else(|| config.catalog_file.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            CliError::config_error(
                "No course source given. Pass --file or set catalog_file in the config.",
            )
        })
}

/// Run a load with lifecycle logging.
fn load_source(source: &Path, catalog: &mut CourseCatalog) -> CliResult<LoadReport> {
    let source_str = source.display().to_string();
    log_event_with_fields(Event::LoadStart, &[("source", source_str.as_str())]);

    match load_catalog(source, catalog) {
        Ok(report) => {
            let diagnostics = report.diagnostics.len().to_string();
            let courses = report.loaded.to_string();
            log_event_with_fields(
                Event::ValidationComplete,
                &[
                    ("diagnostics", diagnostics.as_str()),
                    ("source", source_str.as_str()),
                ],
            );
            log_event_with_fields(
                Event::LoadComplete,
                &[
                    ("courses", courses.as_str()),
                    ("source", source_str.as_str()),
                ],
            );
            Ok(report)
        }
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(
                Event::LoadFailed,
                &[
                    ("reason", reason.as_str()),
                    ("source", source_str.as_str()),
                ],
            );
            Err(e.into())
        }
    }
}

/// Display a load report the way the advisor expects: the full diagnostic
/// text when there are findings, otherwise just the loaded count.
fn print_load_report(report: &LoadReport) -> CliResult<()> {
    if report.is_clean() {
        write_line(&format!(
            "File validated. Loaded {} courses.",
            report.loaded
        ))
    } else {
        write_line(&format!(
            "Validation issues ({}):",
            report.diagnostics.len()
        ))?;
        for diagnostic in &report.diagnostics {
            write_line(&format!(" - {}", diagnostic))?;
        }
        Ok(())
    }
}

/// Interactive advisor menu.
///
/// Options 2 and 3 require a successful load first; EOF on stdin ends the
/// session like option 9.
fn menu(config: &Config) -> CliResult<()> {
    log_event(Event::SessionStart);

    let mut catalog = CourseCatalog::new();
    let mut data_loaded = false;

    loop {
        write_line("")?;
        write_line("Course Advisor Menu")?;
        write_line("  1. Load Data")?;
        write_line("  2. Print Course List (Sorted)")?;
        write_line("  3. Print Course")?;
        write_line("  9. Exit")?;

        let choice = match prompt("Enter choice: ")? {
            Some(choice) => choice,
            None => break, // EOF, stream closed
        };

        match choice.as_str() {
            "1" => {
                // No load attempt (aborted prompt) leaves prior state alone.
                if let Some(ok) = menu_load(config, &mut catalog)? {
                    data_loaded = ok;
                }
            }
            "2" => {
                if !data_loaded || catalog.is_empty() {
                    write_line("Please load data first (Option 1).")?;
                    continue;
                }
                log_event_with_fields(Event::QueryReceived, &[("kind", "list")]);
                write_line("")?;
                write_line("Course List (alphanumeric):")?;
                write_lines(&list_sorted(&catalog))?;
            }
            "3" => {
                if !data_loaded || catalog.is_empty() {
                    write_line("Please load data first (Option 1).")?;
                    continue;
                }
                menu_show(&catalog)?;
            }
            "9" => {
                write_line("Goodbye.")?;
                break;
            }
            _ => {
                write_line("Invalid choice. Please select 1, 2, 3, or 9.")?;
            }
        }
    }

    log_event(Event::SessionEnd);
    Ok(())
}

/// Menu option 1: prompt for a filename and load it.
///
/// Returns `Some(ok)` when a load was attempted (`ok` = the catalog now
/// holds a successful load) and `None` when the prompt was aborted before
/// any load ran. A failed load is reported and the menu continues.
fn menu_load(config: &Config, catalog: &mut CourseCatalog) -> CliResult<Option<bool>> {
    let text = match &config.catalog_file {
        Some(default) => format!("Enter the course data filename [{}]: ", default),
        None => "Enter the course data filename (e.g., courses.txt): ".to_string(),
    };

    let answer = match prompt(&text)? {
        Some(answer) => answer,
        None => {
            write_line("Input aborted.")?;
            return Ok(None);
        }
    };

    let source = if answer.is_empty() {
        match &config.catalog_file {
            Some(default) => PathBuf::from(default),
            None => {
                write_line("Please enter a non-empty filename.")?;
                return Ok(None);
            }
        }
    } else {
        PathBuf::from(answer)
    };

    match load_source(&source, catalog) {
        Ok(report) => {
            print_load_report(&report)?;
            Ok(Some(true))
        }
        Err(e) => {
            write_line(&format!("Load failed: {}", e.message()))?;
            Ok(Some(false))
        }
    }
}

/// Menu option 3: prompt for a course number and describe it.
fn menu_show(catalog: &CourseCatalog) -> CliResult<()> {
    let target = match prompt("Enter course number (e.g., CSCI300): ")? {
        Some(target) => target,
        None => return Ok(()), // EOF
    };

    if target.is_empty() {
        write_line("Please enter a non-empty course number.")?;
        return Ok(());
    }

    log_event_with_fields(
        Event::QueryReceived,
        &[("kind", "describe"), ("course", target.as_str())],
    );

    match describe_course(catalog, &target) {
        Some(view) => write_lines(&view.render_lines()),
        None => {
            log_event_with_fields(Event::CourseNotFound, &[("course", target.as_str())]);
            write_line("Course not found.")
        }
    }
}
