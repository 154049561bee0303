//! The percent panel: `base × rate / 100` from two free-text inputs.

use serde::Serialize;

use crate::constants::PERCENT_DECIMALS;
use crate::operand::format_number;

/// One of the two percent-panel inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Base,
    Rate,
}

impl Field {
    /// The other input.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Base => Self::Rate,
            Self::Rate => Self::Base,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "Base amount",
            Self::Rate => "Rate (%)",
        }
    }
}

/// Parsed inputs and the computed output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentOutcome {
    pub base: f64,
    pub rate: f64,
    pub output: f64,
}

impl PercentOutcome {
    /// Compute from already-parsed numbers.
    #[must_use]
    pub fn new(base: f64, rate: f64) -> Self {
        Self {
            base,
            rate,
            output: base * rate / 100.0,
        }
    }

    /// `"<rate>% of <base> = <output>"`, each to two decimals.
    #[must_use]
    pub fn sentence(&self) -> String {
        format!(
            "{}% of {} = {}",
            fixed(self.rate),
            fixed(self.base),
            fixed(self.output)
        )
    }
}

/// Parse a field value. Blank or unparseable text counts as 0.
#[must_use]
pub fn parse_field(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn fixed(value: f64) -> String {
    // Overflowed products show the infinity glyph like the keypad does.
    if !value.is_finite() {
        return format_number(value);
    }
    let formatted = format!("{value:.prec$}", prec = PERCENT_DECIMALS);
    // Values that round to zero print without a sign.
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        formatted.trim_start_matches('-').to_string()
    } else {
        formatted
    }
}

/// State of the percent panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentPanel {
    base: String,
    rate: String,
    sentence: String,
}

impl Default for PercentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PercentPanel {
    /// Create a panel with blank inputs.
    #[must_use]
    pub fn new() -> Self {
        let mut panel = Self {
            base: String::new(),
            rate: String::new(),
            sentence: String::new(),
        };
        panel.compute();
        panel
    }

    /// Raw text of a field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Base => &self.base,
            Field::Rate => &self.rate,
        }
    }

    /// Replace a field's text and recompute.
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Base => self.base = text,
            Field::Rate => self.rate = text,
        }
        self.compute();
    }

    /// Recompute the output from the current inputs.
    pub fn compute(&mut self) -> PercentOutcome {
        let outcome = self.outcome();
        self.sentence = outcome.sentence();
        outcome
    }

    /// Outcome for the current inputs, without touching the sentence.
    #[must_use]
    pub fn outcome(&self) -> PercentOutcome {
        PercentOutcome::new(parse_field(&self.base), parse_field(&self.rate))
    }

    /// Last rendered sentence.
    #[must_use]
    pub fn sentence(&self) -> &str {
        &self.sentence
    }
}
