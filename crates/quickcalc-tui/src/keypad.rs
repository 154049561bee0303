//! Standard panel: expression and value lines above a clickable keypad.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use quickcalc_core::{Action, Display, EntryKey, Operator};

use crate::styles::ColorTheme;

/// Keypad grid columns.
pub const KEYPAD_COLUMNS: u16 = 4;
/// Keypad grid rows.
pub const KEYPAD_ROWS: u16 = 5;

/// A keypad button placed on the grid.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub row: u16,
    pub col: u16,
    pub span: u16,
}

const fn button(label: &'static str, action: Action, row: u16, col: u16, span: u16) -> Button {
    Button {
        label,
        action,
        row,
        col,
        span,
    }
}

const fn digit(label: &'static str, d: u8, row: u16, col: u16) -> Button {
    button(label, Action::Digit(EntryKey::Digit(d)), row, col, 1)
}

/// The keypad, row by row.
pub static KEYPAD: [Button; 19] = [
    button("C", Action::Clear, 0, 0, 1),
    button("±", Action::InvertSign, 0, 1, 1),
    button("%", Action::QuickPercent, 0, 2, 1),
    button("÷", Action::Operator(Operator::Divide), 0, 3, 1),
    digit("7", 7, 1, 0),
    digit("8", 8, 1, 1),
    digit("9", 9, 1, 2),
    button("×", Action::Operator(Operator::Multiply), 1, 3, 1),
    digit("4", 4, 2, 0),
    digit("5", 5, 2, 1),
    digit("6", 6, 2, 2),
    button("−", Action::Operator(Operator::Subtract), 2, 3, 1),
    digit("1", 1, 3, 0),
    digit("2", 2, 3, 1),
    digit("3", 3, 3, 2),
    button("+", Action::Operator(Operator::Add), 3, 3, 1),
    digit("0", 0, 4, 0),
    button(".", Action::Digit(EntryKey::Point), 4, 1, 1),
    button("=", Action::Equals, 4, 2, 2),
];

/// Split the standard panel into (display, keypad) areas.
#[must_use]
pub fn compute_panel_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // expression + value
            Constraint::Min(KEYPAD_ROWS),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Grid position of a cell boundary: `index` of `count` parts of `length`.
fn boundary(start: u16, length: u16, index: u16, count: u16) -> u16 {
    let offset = u32::from(length) * u32::from(index) / u32::from(count);
    // offset <= length, which fits in u16.
    start + u16::try_from(offset).unwrap_or(length)
}

/// Screen area of a button inside the keypad area.
#[must_use]
pub fn button_rect(keypad: Rect, button: &Button) -> Rect {
    let x0 = boundary(keypad.x, keypad.width, button.col, KEYPAD_COLUMNS);
    let x1 = boundary(keypad.x, keypad.width, button.col + button.span, KEYPAD_COLUMNS);
    let y0 = boundary(keypad.y, keypad.height, button.row, KEYPAD_ROWS);
    let y1 = boundary(keypad.y, keypad.height, button.row + 1, KEYPAD_ROWS);
    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

/// The button under a terminal cell, if any.
#[must_use]
pub fn button_at(keypad: Rect, column: u16, row: u16) -> Option<&'static Button> {
    KEYPAD.iter().find(|b| {
        let rect = button_rect(keypad, b);
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    })
}

/// Render the standard panel.
pub fn render_standard(frame: &mut Frame, area: Rect, display: &Display, theme: &ColorTheme) {
    let (display_area, keypad_area) = compute_panel_layout(area);

    let lines = vec![
        Line::styled(display.expression.clone(), theme.muted_style()).alignment(Alignment::Right),
        Line::styled(display.value.clone(), theme.value_style()).alignment(Alignment::Right),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Standard ")
        .border_style(theme.root_style(display.mode_tag));
    frame.render_widget(Paragraph::new(lines).block(block), display_area);

    for b in &KEYPAD {
        let rect = button_rect(keypad_area, b);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        let style = match b.action {
            Action::Operator(_) | Action::Equals => theme.header_style(display.mode_tag),
            Action::Clear => theme.error_style(),
            _ => theme.text_style(),
        };
        let borders = if rect.height >= 3 {
            Borders::ALL
        } else {
            Borders::NONE
        };
        let key = Paragraph::new(Line::styled(b.label, style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(borders)
                    .border_style(theme.border_style()),
            );
        frame.render_widget(key, rect);
    }
}
