//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Accent color for a mode tag (`"standard"` or `"percent"`).
    #[must_use]
    pub fn accent(&self, mode_tag: &str) -> Color {
        match mode_tag {
            "percent" => self.secondary,
            _ => self.primary,
        }
    }

    /// Border style of the root container for a mode tag.
    #[must_use]
    pub fn root_style(&self, mode_tag: &str) -> Style {
        Style::default().fg(self.accent(mode_tag))
    }

    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self, mode_tag: &str) -> Style {
        Style::default()
            .fg(self.accent(mode_tag))
            .add_modifier(Modifier::BOLD)
    }

    /// Big value line.
    #[must_use]
    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for success text.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Border of the focused control.
    #[must_use]
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Border of an unfocused control.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_per_mode() {
        let theme = ColorTheme::default();
        assert_eq!(theme.accent("standard"), Color::Cyan);
        assert_eq!(theme.accent("percent"), Color::Magenta);
        assert_eq!(theme.accent("anything"), Color::Cyan);
    }

    #[test]
    fn header_is_bold() {
        let theme = ColorTheme::default();
        assert!(theme
            .header_style("standard")
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
