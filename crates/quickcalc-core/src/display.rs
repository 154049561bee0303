//! Render: map calculator state to display text.

use serde::Serialize;

use crate::calculator::CalculatorState;
use crate::mode::{Mode, ModeMenu};
use crate::percent::{Field, PercentPanel};

/// Which control receives typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Keypad,
    Base,
    Rate,
}

impl Focus {
    /// The percent-panel field this focus points at, if any.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Keypad => None,
            Self::Base => Some(Field::Base),
            Self::Rate => Some(Field::Rate),
        }
    }
}

impl From<Field> for Focus {
    fn from(field: Field) -> Self {
        match field {
            Field::Base => Self::Base,
            Field::Rate => Self::Rate,
        }
    }
}

/// Everything the front end writes to screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Display {
    /// Primary value line.
    pub value: String,
    /// Secondary expression line: `"<previous> <symbol>"` or the value.
    pub expression: String,
    /// Mode name label.
    pub mode_label: &'static str,
    /// Styling tag of the root container.
    pub mode_tag: &'static str,
    /// Active panel; the other one is hidden.
    pub panel: Mode,
    /// `aria-expanded` of the mode toggle.
    pub menu_expanded: &'static str,
    /// Percent panel sentence.
    pub percent_text: String,
    pub base_input: String,
    pub rate_input: String,
    pub focus: Focus,
}

impl Display {
    #[must_use]
    pub fn standard_visible(&self) -> bool {
        self.panel == Mode::Standard
    }

    #[must_use]
    pub fn percent_visible(&self) -> bool {
        self.panel == Mode::Percent
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_expanded == "true"
    }
}

/// Build the display for the given state.
#[must_use]
pub fn render(
    state: &CalculatorState,
    percent: &PercentPanel,
    menu: &ModeMenu,
    focus: Focus,
) -> Display {
    let symbol = state.operator().map_or("", |op| op.symbol());
    let expression = match state.previous() {
        Some(previous) => format!("{previous} {symbol}"),
        None => state.current().to_string(),
    };
    let mode = state.mode();
    Display {
        value: state.current().to_string(),
        expression,
        mode_label: mode.label(),
        mode_tag: mode.tag(),
        panel: mode,
        menu_expanded: menu.aria_expanded(),
        percent_text: percent.sentence().to_string(),
        base_input: percent.field(Field::Base).to_string(),
        rate_input: percent.field(Field::Rate).to_string(),
        focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::EntryKey;
    use crate::operator::Operator;

    #[test]
    fn initial_render() {
        let display = render(
            &CalculatorState::new(),
            &PercentPanel::new(),
            &ModeMenu::new(),
            Focus::Keypad,
        );
        assert_eq!(display.value, "0");
        assert_eq!(display.expression, "0");
        assert_eq!(display.mode_label, "Standard");
        assert_eq!(display.mode_tag, "standard");
        assert!(display.standard_visible());
        assert!(!display.percent_visible());
        assert!(!display.menu_open());
    }

    #[test]
    fn pending_expression_uses_symbol() {
        let mut state = CalculatorState::new();
        state.input(EntryKey::Digit(7));
        state.apply_operator(Operator::Multiply);
        let display = render(&state, &PercentPanel::new(), &ModeMenu::new(), Focus::Keypad);
        assert_eq!(display.expression, "7 ×");
        assert_eq!(display.value, "0");
    }

    #[test]
    fn subtract_symbol_is_minus_sign() {
        let mut state = CalculatorState::new();
        state.input(EntryKey::Digit(4));
        state.apply_operator(Operator::Subtract);
        let display = render(&state, &PercentPanel::new(), &ModeMenu::new(), Focus::Keypad);
        assert_eq!(display.expression, "4 −");
    }

    #[test]
    fn focus_field_mapping() {
        assert_eq!(Focus::Keypad.field(), None);
        assert_eq!(Focus::Base.field(), Some(Field::Base));
        assert_eq!(Focus::from(Field::Rate), Focus::Rate);
    }
}
