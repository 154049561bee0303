//! Operands: display text paired with the parsed value.
//!
//! The text is what the user sees and types into; the value is what the
//! arithmetic uses. Both are updated together so numeric meaning is never
//! re-derived from stale text.

use std::fmt;

use serde::Serialize;

use crate::calculator::CalcError;
use crate::constants::{INFINITY_GLYPH, INITIAL_DISPLAY, NEG_INFINITY_GLYPH};

/// A key accepted by digit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    /// The decimal point.
    Point,
}

impl EntryKey {
    /// The character this key appends.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::Point => '.',
        }
    }
}

impl TryFrom<char> for EntryKey {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c == '.' {
            return Ok(Self::Point);
        }
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Self::Digit)
            .ok_or(CalcError::UnknownKey {
                key: c,
                position: 0,
            })
    }
}

/// Format a value the way the display shows results.
///
/// Finite values use the shortest round-trip decimal form. Anything else
/// renders as the `∞` glyph (`-∞` when negative).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else if value.is_sign_negative() {
        NEG_INFINITY_GLYPH.to_string()
    } else {
        INFINITY_GLYPH.to_string()
    }
}

/// Parse operand text permissively.
///
/// Anything that is not a finite number counts as 0, including the `∞`
/// glyph and spellings such as `inf` or `NaN`.
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// A calculator operand.
///
/// The value is always finite. A symbolic result keeps its glyph as text
/// and counts as 0 in later arithmetic.
#[derive(Debug, Clone, Serialize)]
pub struct Operand {
    text: String,
    #[serde(skip)]
    value: f64,
}

impl Operand {
    /// The cleared operand, `"0"`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            text: INITIAL_DISPLAY.to_string(),
            value: 0.0,
        }
    }

    /// Build an operand from a computed value.
    ///
    /// Non-finite values become the symbolic glyph.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            text: format_number(value),
            value: if value.is_finite() { value } else { 0.0 },
        }
    }

    /// Build an operand from arbitrary text, parsing it permissively.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = parse_lenient(&text);
        Self { text, value }
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the text already holds a decimal point.
    #[must_use]
    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Whether the text is exactly `"0"`.
    #[must_use]
    pub fn is_literal_zero(&self) -> bool {
        self.text == INITIAL_DISPLAY
    }

    /// Append a key following the entry rules.
    ///
    /// `fresh` starts a new number (a result was just shown). Returns
    /// `false` when the key was rejected.
    pub fn push_key(&mut self, key: EntryKey, fresh: bool) -> bool {
        match key {
            EntryKey::Point => {
                if self.has_point() {
                    return false;
                }
                self.text.push('.');
            }
            EntryKey::Digit(_) => {
                if fresh || self.is_literal_zero() {
                    self.text.clear();
                }
                self.text.push(key.as_char());
            }
        }
        self.value = parse_lenient(&self.text);
        true
    }

    /// Negate the value and re-stringify it.
    pub fn negate(&mut self) {
        *self = Self::from_value(-self.value);
    }

    /// Divide the value by 100 and re-stringify it.
    pub fn to_percent(&mut self) {
        *self = Self::from_value(self.value / 100.0);
    }
}

// The value is derived from the text.
impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
