//! Calculator modes and the mode-selection menu.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::CalcError;

/// Which panel is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Percent,
}

impl Mode {
    /// Modes in menu order.
    pub const ALL: [Mode; 2] = [Mode::Standard, Mode::Percent];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Percent => "Percent",
        }
    }

    /// Styling tag applied to the root container.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Percent => "percent",
        }
    }

    /// Position in [`Mode::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Standard => 0,
            Self::Percent => 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" | "basic" => Ok(Self::Standard),
            "percent" | "pct" | "%" => Ok(Self::Percent),
            _ => Err(CalcError::InvalidMode(s.to_string())),
        }
    }
}

/// Dropdown menu listing the modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeMenu {
    open: bool,
    /// Highlighted entry while the menu is open.
    highlighted: usize,
}

impl ModeMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Flip open/closed. Opening highlights the active mode.
    pub fn toggle(&mut self, active: Mode) {
        self.open = !self.open;
        if self.open {
            self.highlighted = active.index();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Highlighted mode.
    #[must_use]
    pub fn highlighted(&self) -> Mode {
        Mode::ALL[self.highlighted % Mode::ALL.len()]
    }

    /// Move the highlight by `delta` entries, wrapping around.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = Mode::ALL.len();
        let step = delta.unsigned_abs() % len;
        self.highlighted = if delta >= 0 {
            (self.highlighted + step) % len
        } else {
            (self.highlighted + len - step) % len
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_tags() {
        assert_eq!(Mode::Standard.label(), "Standard");
        assert_eq!(Mode::Percent.label(), "Percent");
        assert_eq!(Mode::Standard.tag(), "standard");
        assert_eq!(Mode::Percent.to_string(), "percent");
    }

    #[test]
    fn parse_modes() {
        assert_eq!("Standard".parse::<Mode>().unwrap(), Mode::Standard);
        assert_eq!(" percent ".parse::<Mode>().unwrap(), Mode::Percent);
        assert_eq!(
            "scientific".parse::<Mode>(),
            Err(CalcError::InvalidMode("scientific".into()))
        );
    }

    #[test]
    fn menu_toggle_and_aria() {
        let mut menu = ModeMenu::new();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
        menu.toggle(Mode::Standard);
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        menu.toggle(Mode::Standard);
        assert!(!menu.is_open());
    }

    #[test]
    fn opening_highlights_active_mode() {
        let mut menu = ModeMenu::new();
        menu.toggle(Mode::Percent);
        assert_eq!(menu.highlighted(), Mode::Percent);
    }

    #[test]
    fn highlight_wraps() {
        let mut menu = ModeMenu::new();
        menu.toggle(Mode::Standard);
        menu.move_highlight(1);
        assert_eq!(menu.highlighted(), Mode::Percent);
        menu.move_highlight(1);
        assert_eq!(menu.highlighted(), Mode::Standard);
        menu.move_highlight(-1);
        assert_eq!(menu.highlighted(), Mode::Percent);
    }
}
