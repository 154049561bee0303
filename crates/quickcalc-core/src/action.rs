//! UI actions and the key-script notation.
//!
//! A key script is a compact string of calculator keys, e.g. `"12.5 + 3 ="`.
//!
//! | key                    | action            |
//! |------------------------|-------------------|
//! | `0`-`9`, `.`           | digit entry       |
//! | `+ - * / x × ÷ −`      | apply operator    |
//! | `=`                    | equals            |
//! | `c`, `C`               | clear             |
//! | `~`, `±`               | invert sign       |
//! | `%`                    | quick percent     |
//!
//! Whitespace is ignored.

use crate::calculator::CalcError;
use crate::display::Focus;
use crate::mode::Mode;
use crate::operand::EntryKey;
use crate::operator::Operator;
use crate::percent::Field;

/// An event delivered to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Digit or decimal-point button.
    Digit(EntryKey),
    /// Operator button.
    Operator(Operator),
    /// Equals button.
    Equals,
    /// Clear button.
    Clear,
    /// Invert-sign button.
    InvertSign,
    /// Quick-percent button.
    QuickPercent,
    /// Mode toggle button.
    ToggleMenu,
    /// Menu option.
    SelectMode(Mode),
    /// Click anywhere outside the toggle and menu.
    OutsideClick,
    /// Escape key.
    Escape,
    /// New text for a percent-panel input.
    FieldInput(Field, String),
    /// Percent-panel compute button.
    ComputePercent,
    /// Move input focus.
    Focus(Focus),
}

impl Action {
    /// Parse a single key-script character.
    #[must_use]
    pub fn from_key(c: char) -> Option<Self> {
        if let Ok(key) = EntryKey::try_from(c) {
            return Some(Self::Digit(key));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '~' | '±' => Some(Self::InvertSign),
            '%' => Some(Self::QuickPercent),
            _ => None,
        }
    }

    /// Whether the action belongs to the standard keypad.
    #[must_use]
    pub fn is_keypad(&self) -> bool {
        matches!(
            self,
            Self::Digit(_)
                | Self::Operator(_)
                | Self::Equals
                | Self::Clear
                | Self::InvertSign
                | Self::QuickPercent
        )
    }
}

/// Parse a key script into actions.
///
/// Positions in errors are character offsets.
pub fn parse_script(script: &str) -> Result<Vec<Action>, CalcError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| {
            Action::from_key(key).ok_or(CalcError::UnknownKey { key, position })
        })
        .collect()
}
