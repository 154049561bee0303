//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use quickcalc_core::{ComputeRecord, Display};

/// Machine-readable report printed by `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub display: &'a Display,
    pub tape: &'a [ComputeRecord],
}

/// The line a run is summarised by: the value in standard mode, the
/// percent sentence in percent mode.
#[must_use]
pub fn primary_line(display: &Display) -> &str {
    if display.percent_visible() {
        &display.percent_text
    } else {
        &display.value
    }
}

/// Format the tape as numbered lines.
#[must_use]
pub fn format_tape(tape: &[ComputeRecord]) -> String {
    let width = tape.len().to_string().len();
    tape.iter()
        .enumerate()
        .map(|(i, record)| format!("{:>width$}. {record}\n", i + 1))
        .collect()
}

/// Serialize a display snapshot and tape as pretty JSON.
///
/// # Errors
///
/// Returns a serialization error; none is expected for these types.
pub fn format_json(display: &Display, tape: &[ComputeRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { display, tape })
}

/// Write a result line to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    debug!(path = %path.display(), "result written");
    Ok(())
}
