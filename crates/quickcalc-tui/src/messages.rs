//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// A completed computation for the tape.
    Tape(String),
    /// Key press, already mapped to an action.
    KeyPress(KeyAction),
    /// Left mouse button pressed at a terminal cell.
    Click { column: u16, row: u16 },
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic redraws.
    Tick,
    /// Quit the application.
    Quit,
}
