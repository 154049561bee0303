//! Binary operators of the standard calculator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::CalcError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown in the expression line.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to `a` and `b`.
    ///
    /// Division by exactly zero (either sign) yields positive infinity,
    /// which renders as the `∞` glyph.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::INFINITY
                } else {
                    a / b
                }
            }
        }
    }

    /// Map a keypad character to an operator.
    ///
    /// Accepts both ASCII and typographic forms.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "add" | "plus" => return Ok(Self::Add),
            "subtract" | "sub" | "minus" => return Ok(Self::Subtract),
            "multiply" | "mul" | "times" => return Ok(Self::Multiply),
            "divide" | "div" => return Ok(Self::Divide),
            _ => {}
        }
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| CalcError::InvalidOperator(s.to_string()))
            }
            _ => Err(CalcError::InvalidOperator(s.to_string())),
        }
    }
}
