//! Terminal I/O helpers for the advisor shell
//!
//! Prompts go to stdout unbuffered so they appear before the read;
//! reports are plain lines on stdout. UTF-8 only.

use std::io::{self, BufRead, Write};

use super::errors::CliResult;

/// Print a prompt (no newline) and read one trimmed line from stdin.
///
/// Returns `None` on EOF (stream closed), which callers treat as the end
/// of the session.
pub fn prompt(text: &str) -> CliResult<Option<String>> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    read_line()
}

/// Read one trimmed line from stdin, `None` on EOF.
pub fn read_line() -> CliResult<Option<String>> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Write one report line to stdout.
pub fn write_line(line: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}

/// Write a sequence of report lines to stdout.
pub fn write_lines<S: AsRef<str>>(lines: &[S]) -> CliResult<()> {
    let mut stdout = io::stdout();
    for line in lines {
        writeln!(stdout, "{}", line.as_ref())?;
    }
    stdout.flush()?;
    Ok(())
}
