//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use quickcalc_core::Mode;

fn hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Standard => &[
            ("q", "quit"),
            ("m", "mode"),
            ("c", "clear"),
            ("~", "±"),
            ("%", "percent"),
            ("enter", "="),
            ("↑↓", "tape"),
        ],
        Mode::Percent => &[
            ("q", "quit"),
            ("m", "mode"),
            ("tab", "field"),
            ("enter", "compute"),
            ("↑↓", "tape"),
        ],
    }
}

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, mode: Mode) {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints(mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {label}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
