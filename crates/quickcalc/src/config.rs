//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use quickcalc_core::{CalcError, Mode};

/// QuickCalc, a four-function and percentage calculator.
///
/// Without `--keys`, `--base` or `--rate` the interactive TUI starts.
#[derive(Parser, Debug)]
#[command(name = "quickcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Key script to run non-interactively, e.g. "5+3=" or "9%".
    #[arg(short, long, env = "QUICKCALC_KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Initial mode of the TUI: standard or percent.
    #[arg(short, long, default_value = "standard", env = "QUICKCALC_MODE")]
    pub mode: String,

    /// Base amount for a one-shot percent computation.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "keys")]
    pub base: Option<String>,

    /// Rate in percent for a one-shot percent computation.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "keys")]
    pub rate: Option<String>,

    /// Print the display snapshot and tape as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the result line to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The requested initial mode.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidMode` for an unknown mode name.
    pub fn initial_mode(&self) -> Result<Mode, CalcError> {
        self.mode.parse()
    }

    /// Whether a one-shot percent computation was requested.
    #[must_use]
    pub fn is_percent_run(&self) -> bool {
        self.base.is_some() || self.rate.is_some()
    }

    /// Whether to run non-interactively.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        self.keys.is_some() || self.is_percent_run()
    }
}
