//! TUI header panel with the mode toggle.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use quickcalc_core::Display;

use crate::styles::ColorTheme;

/// Width of the mode toggle control.
pub const TOGGLE_WIDTH: u16 = 16;

/// Area of the mode toggle inside the header.
#[must_use]
pub fn toggle_rect(header: Rect) -> Rect {
    let width = TOGGLE_WIDTH.min(header.width);
    Rect::new(
        header.x + header.width - width,
        header.y,
        width,
        header.height.saturating_sub(1).max(1).min(header.height),
    )
}

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, display: &Display, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled("QuickCalc", theme.header_style(display.mode_tag)),
        Span::raw(format!(" | Mode: {}", display.mode_label)),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" QuickCalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);

    let arrow = if display.menu_open() { "▴" } else { "▾" };
    let toggle = Paragraph::new(Line::from(Span::styled(
        format!("[{} {arrow}]", display.mode_label),
        Style::default().fg(theme.accent(display.mode_tag)),
    )));
    frame.render_widget(toggle, toggle_rect(area));
}
