//! Keyboard shortcut handling.
//!
//! What a key does depends on where input goes: the open mode menu
//! captures navigation keys, a focused percent field captures numeric
//! characters, and otherwise keys drive the keypad.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use quickcalc_core::{Action, Focus, Mode};

/// TUI keyboard actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// A calculator keypad action.
    Calc(Action),
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    MenuPick(Mode),
    Escape,
    /// Character typed into the focused field.
    FieldChar(char),
    FieldBackspace,
    NextField,
    ComputePercent,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Characters a percent field accepts.
fn is_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent, focus: Focus, menu_open: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if menu_open {
        return match key.code {
            KeyCode::Esc => KeyAction::Escape,
            KeyCode::Up => KeyAction::MenuUp,
            KeyCode::Down => KeyAction::MenuDown,
            KeyCode::Enter => KeyAction::MenuSelect,
            KeyCode::Char('1') => KeyAction::MenuPick(Mode::Standard),
            KeyCode::Char('2') => KeyAction::MenuPick(Mode::Percent),
            KeyCode::Char('m') => KeyAction::ToggleMenu,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => return KeyAction::Escape,
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char('m') => return KeyAction::ToggleMenu,
        KeyCode::Up => return KeyAction::ScrollUp,
        KeyCode::Down => return KeyAction::ScrollDown,
        KeyCode::PageUp => return KeyAction::PageUp,
        KeyCode::PageDown => return KeyAction::PageDown,
        KeyCode::Home => return KeyAction::Home,
        KeyCode::End => return KeyAction::End,
        _ => {}
    }

    if focus.field().is_some() {
        return match key.code {
            KeyCode::Char(c) if is_field_char(c) => KeyAction::FieldChar(c),
            KeyCode::Backspace => KeyAction::FieldBackspace,
            KeyCode::Tab | KeyCode::BackTab => KeyAction::NextField,
            KeyCode::Enter => KeyAction::ComputePercent,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => KeyAction::Calc(Action::Equals),
        KeyCode::Delete => KeyAction::Calc(Action::Clear),
        KeyCode::Char(c) => Action::from_key(c).map_or(KeyAction::None, KeyAction::Calc),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcalc_core::{EntryKey, Operator};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), Focus::Keypad, false),
            KeyAction::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Focus::Base, true), KeyAction::Quit);
    }

    #[test]
    fn keypad_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('7')), Focus::Keypad, false),
            KeyAction::Calc(Action::Digit(EntryKey::Digit(7)))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('*')), Focus::Keypad, false),
            KeyAction::Calc(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Keypad, false),
            KeyAction::Calc(Action::Equals)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c')), Focus::Keypad, false),
            KeyAction::Calc(Action::Clear)
        );
        assert_eq!(
            map_key(key(KeyCode::Delete), Focus::Keypad, false),
            KeyAction::Calc(Action::Clear)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('%')), Focus::Keypad, false),
            KeyAction::Calc(Action::QuickPercent)
        );
    }

    #[test]
    fn escape_always_escapes() {
        assert_eq!(
            map_key(key(KeyCode::Esc), Focus::Keypad, false),
            KeyAction::Escape
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), Focus::Keypad, true),
            KeyAction::Escape
        );
    }

    #[test]
    fn menu_captures_navigation() {
        assert_eq!(
            map_key(key(KeyCode::Down), Focus::Keypad, true),
            KeyAction::MenuDown
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Keypad, true),
            KeyAction::MenuSelect
        );
        assert_eq!(
            map_key(key(KeyCode::Char('2')), Focus::Keypad, true),
            KeyAction::MenuPick(Mode::Percent)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('5')), Focus::Keypad, true),
            KeyAction::None
        );
    }

    #[test]
    fn field_focus_captures_numbers() {
        assert_eq!(
            map_key(key(KeyCode::Char('5')), Focus::Base, false),
            KeyAction::FieldChar('5')
        );
        assert_eq!(
            map_key(key(KeyCode::Char('.')), Focus::Rate, false),
            KeyAction::FieldChar('.')
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), Focus::Rate, false),
            KeyAction::FieldBackspace
        );
        assert_eq!(
            map_key(key(KeyCode::Tab), Focus::Base, false),
            KeyAction::NextField
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Base, false),
            KeyAction::ComputePercent
        );
        assert_eq!(
            map_key(key(KeyCode::Char('z')), Focus::Base, false),
            KeyAction::None
        );
    }

    #[test]
    fn toggle_menu_key() {
        assert_eq!(
            map_key(key(KeyCode::Char('m')), Focus::Keypad, false),
            KeyAction::ToggleMenu
        );
        assert_eq!(
            map_key(key(KeyCode::Char('m')), Focus::Base, false),
            KeyAction::ToggleMenu
        );
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(
            map_key(key(KeyCode::Up), Focus::Keypad, false),
            KeyAction::ScrollUp
        );
        assert_eq!(
            map_key(key(KeyCode::PageDown), Focus::Base, false),
            KeyAction::PageDown
        );
        assert_eq!(
            map_key(key(KeyCode::Home), Focus::Keypad, false),
            KeyAction::Home
        );
    }

    #[test]
    fn unknown_key() {
        assert_eq!(
            map_key(key(KeyCode::Char('z')), Focus::Keypad, false),
            KeyAction::None
        );
    }
}
