//! Scrollable tape of completed computations.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Scroll state for the tape panel.
#[derive(Debug, Clone)]
pub struct TapeScrollState {
    /// Current scroll offset (first visible line index).
    pub offset: usize,
    /// Whether auto-scroll to bottom is enabled.
    pub auto_scroll: bool,
}

impl TapeScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Handle a new line (auto-scroll if enabled).
    pub fn on_new_line(&mut self, total: usize) {
        if self.auto_scroll {
            self.offset = total.saturating_sub(1);
        }
    }

    /// Adjust after the oldest line was dropped.
    pub fn on_line_dropped(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total: usize) {
        self.offset = (self.offset + 1).min(total.saturating_sub(1));
        if self.offset >= total.saturating_sub(1) {
            self.auto_scroll = true;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize) {
        self.offset = (self.offset + page_size).min(total.saturating_sub(1));
        if self.offset >= total.saturating_sub(1) {
            self.auto_scroll = true;
        }
    }

    /// Jump to top.
    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    /// Jump to bottom.
    pub fn end(&mut self, total: usize) {
        self.auto_scroll = true;
        self.offset = total.saturating_sub(1);
    }
}

impl Default for TapeScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// First line to draw so that `offset` stays visible in `height` rows.
fn first_visible(offset: usize, height: usize) -> usize {
    (offset + 1).saturating_sub(height)
}

/// Render the tape panel.
pub fn render_tape(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    scroll_offset: usize,
    theme: &ColorTheme,
) {
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let total = lines.len();

    let items: Vec<ListItem> = lines
        .iter()
        .skip(first_visible(scroll_offset, visible_height))
        .take(visible_height)
        .map(|line| {
            let style = if line.starts_with("[ERROR]") {
                theme.error_style()
            } else if line.starts_with('[') {
                theme.muted_style()
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(line.as_str())).style(style)
        })
        .collect();

    let title = if total > visible_height {
        let pct = (scroll_offset * 100) / total.saturating_sub(1).max(1);
        format!(" Tape ({pct}%) ")
    } else {
        " Tape ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );

    frame.render_widget(list, area);
}
