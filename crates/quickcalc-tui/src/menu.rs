//! Mode-selection dropdown drawn under the header toggle.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};
use ratatui::Frame;

use quickcalc_core::{Mode, ModeMenu};

use crate::header::toggle_rect;
use crate::styles::ColorTheme;

/// Menu height: one row per mode plus borders.
pub const MENU_HEIGHT: u16 = 4;

/// Area of the open menu, directly under the toggle.
#[must_use]
pub fn menu_rect(header: Rect, screen: Rect) -> Rect {
    let toggle = toggle_rect(header);
    let y = header.y + header.height;
    let height = MENU_HEIGHT.min(screen.height.saturating_sub(y));
    Rect::new(toggle.x, y, toggle.width, height)
}

/// The menu entry under a terminal cell, if any.
#[must_use]
pub fn entry_at(menu: Rect, column: u16, row: u16) -> Option<Mode> {
    if column < menu.x || column >= menu.x + menu.width {
        return None;
    }
    let first = menu.y + 1;
    if row < first || row >= menu.y + menu.height.saturating_sub(1) {
        return None;
    }
    Mode::ALL.get(usize::from(row - first)).copied()
}

/// Whether a cell is inside the menu area.
#[must_use]
pub fn contains(menu: Rect, column: u16, row: u16) -> bool {
    column >= menu.x && column < menu.x + menu.width && row >= menu.y && row < menu.y + menu.height
}

/// Render the open menu.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &ModeMenu,
    active: Mode,
    theme: &ColorTheme,
) {
    let items: Vec<ListItem> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let marker = if *mode == active { "●" } else { " " };
            let mut style = theme.text_style();
            if *mode == menu.highlighted() {
                style = style
                    .fg(theme.accent(mode.tag()))
                    .add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::raw(format!("{marker} {} {}", i + 1, mode.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.root_style(active.tag())),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn menu_sits_under_toggle() {
        let header = Rect::new(0, 0, 80, 3);
        let menu = menu_rect(header, Rect::new(0, 0, 80, 24));
        assert_eq!(menu.y, 3);
        assert_eq!(menu.height, 4);
        assert_eq!(menu.x, toggle_rect(header).x);
    }

    #[test]
    fn entries_by_row() {
        let menu = Rect::new(64, 3, 16, 4);
        assert_eq!(entry_at(menu, 70, 3), None); // top border
        assert_eq!(entry_at(menu, 70, 4), Some(Mode::Standard));
        assert_eq!(entry_at(menu, 70, 5), Some(Mode::Percent));
        assert_eq!(entry_at(menu, 70, 6), None); // bottom border
        assert_eq!(entry_at(menu, 10, 4), None);
        assert!(contains(menu, 64, 3));
        assert!(!contains(menu, 63, 3));
    }

    #[test]
    fn render_lists_modes() {
        let mut menu = ModeMenu::new();
        menu.toggle(Mode::Standard);
        let backend = TestBackend::new(16, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render_menu(frame, area, &menu, Mode::Standard, &ColorTheme::default());
            })
            .unwrap();
        let row = |y: u16| -> String {
            (0..16u16)
                .map(|x| frame.buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(1).contains("Standard"));
        assert!(row(2).contains("Percent"));
    }
}
