//! CLI result presenter.

use std::io::{self, Write};

use quickcalc_core::{ComputeRecord, Display};

use crate::output::{format_json, format_tape, primary_line};
use crate::ui;

/// How much the presenter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only the result line.
    Quiet,
    /// Header and result.
    Normal,
    /// Header, result, expression, mode and tape.
    Verbose,
}

/// CLI result presenter.
pub struct CliPresenter {
    verbosity: Verbosity,
    json: bool,
}

impl CliPresenter {
    /// `quiet` wins over `verbose` when both are set.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Self { verbosity, json }
    }

    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Write the outcome of a run to `out`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn present(
        &self,
        display: &Display,
        tape: &[ComputeRecord],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if self.json {
            let json = format_json(display, tape).map_err(io::Error::other)?;
            return writeln!(out, "{json}");
        }

        let line = primary_line(display);
        if self.verbosity == Verbosity::Quiet {
            return writeln!(out, "{line}");
        }

        writeln!(out, "{}", ui::header(&format!("QuickCalc ({})", display.mode_label)))?;
        if self.verbosity == Verbosity::Verbose {
            if display.standard_visible() {
                writeln!(out, "{}", ui::field("Expression", &display.expression))?;
            } else {
                writeln!(out, "{}", ui::field("Base", &display.base_input))?;
                writeln!(out, "{}", ui::field("Rate", &display.rate_input))?;
            }
            writeln!(out, "{}", ui::field("Mode", display.mode_tag))?;
        }
        writeln!(out, "{}", ui::field("Result", line))?;

        if self.verbosity == Verbosity::Verbose && !tape.is_empty() {
            writeln!(out, "{}", ui::header("Tape"))?;
            write!(out, "{}", format_tape(tape))?;
        }
        Ok(())
    }
}
