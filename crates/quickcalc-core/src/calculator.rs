//! The arithmetic state machine.
//!
//! `CalculatorState` owns the current operand, the pending operation and
//! the just-calculated flag. The pending operation is a tagged variant, so
//! a left operand never exists without an operator and vice versa.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::mode::Mode;
use crate::operand::{EntryKey, Operand};
use crate::operator::Operator;

/// Errors at the edges of the calculator (parsing keys, modes, operators).
///
/// Calculator operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// A key script contained a character with no meaning.
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: char, position: usize },

    /// A mode name could not be parsed.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// An operator name could not be parsed.
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
}

/// The pending binary operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Pending {
    /// Nothing pending.
    #[default]
    Idle,
    /// An operator was pressed; `previous` waits for the right operand.
    Operator {
        previous: Operand,
        operator: Operator,
    },
}

/// A completed computation, as shown on the tape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeRecord {
    pub left: String,
    pub operator: Operator,
    pub right: String,
    pub result: String,
}

impl fmt::Display for ComputeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left,
            self.operator.symbol(),
            self.right,
            self.result
        )
    }
}

/// Calculator state: mode, current operand, pending operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    mode: Mode,
    current: Operand,
    pending: Pending,
    just_calculated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create the initial state in standard mode.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(Mode::Standard)
    }

    /// Create the initial state in the given mode.
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            current: Operand::zero(),
            pending: Pending::Idle,
            just_calculated: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Current operand text.
    #[must_use]
    pub fn current(&self) -> &str {
        self.current.text()
    }

    /// Current operand.
    #[must_use]
    pub fn current_operand(&self) -> &Operand {
        &self.current
    }

    /// Left operand text of the pending operation, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        match &self.pending {
            Pending::Idle => None,
            Pending::Operator { previous, .. } => Some(previous.text()),
        }
    }

    /// Pending operator, if any.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match &self.pending {
            Pending::Idle => None,
            Pending::Operator { operator, .. } => Some(*operator),
        }
    }

    #[must_use]
    pub fn pending(&self) -> &Pending {
        &self.pending
    }

    /// Whether a result was just shown.
    #[must_use]
    pub fn just_calculated(&self) -> bool {
        self.just_calculated
    }

    /// Whether the arithmetic fields hold their initial values.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.current.is_literal_zero()
            && self.pending == Pending::Idle
            && !self.just_calculated
    }

    /// Enter a digit or the decimal point.
    ///
    /// After a result, a digit starts a new number while a point extends
    /// the result. A second point in one number is ignored.
    pub fn input(&mut self, key: EntryKey) {
        let fresh = self.just_calculated && key != EntryKey::Point;
        if self.current.push_key(key, fresh) {
            self.just_calculated = false;
        } else {
            trace!(?key, current = self.current.text(), "entry rejected");
        }
    }

    /// Select a binary operator.
    ///
    /// A pending operation is evaluated first, left to right. Returns the
    /// record of that chained evaluation, if one happened.
    pub fn apply_operator(&mut self, operator: Operator) -> Option<ComputeRecord> {
        let chained = if self.operator().is_some() && !self.just_calculated {
            self.compute()
        } else {
            None
        };
        let previous = std::mem::take(&mut self.current);
        debug!(left = previous.text(), %operator, "operator pending");
        self.pending = Pending::Operator { previous, operator };
        self.just_calculated = false;
        chained
    }

    /// Evaluate the pending operation. No-op when nothing is pending.
    ///
    /// A symbolic operand such as `∞` takes part as 0.
    pub fn compute(&mut self) -> Option<ComputeRecord> {
        let Pending::Operator { previous, operator } = std::mem::take(&mut self.pending) else {
            return None;
        };
        let result = Operand::from_value(operator.apply(previous.value(), self.current.value()));
        let record = ComputeRecord {
            left: previous.text().to_string(),
            operator,
            right: self.current.text().to_string(),
            result: result.text().to_string(),
        };
        debug!(%record, "computed");
        self.current = result;
        self.just_calculated = true;
        Some(record)
    }

    /// Negate the current value. No-op when the text is exactly `"0"`.
    pub fn invert_sign(&mut self) {
        if !self.current.is_literal_zero() {
            self.current.negate();
        }
    }

    /// Divide the current value by 100.
    pub fn quick_percent(&mut self) {
        self.current.to_percent();
    }

    /// Restore the arithmetic fields to their initial values. The mode is kept.
    pub fn reset(&mut self) {
        self.current = Operand::zero();
        self.pending = Pending::Idle;
        self.just_calculated = false;
    }
}
