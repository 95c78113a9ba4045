//! Theme system for TUI colors and styles
//!
//! Colors match the CLI table output (commands/ls.rs).

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Badge colors
    pub paid: Color,
    pub pending: Color,
    pub valid: Color,
    pub used: Color,

    // Brand colors
    pub title: Color,
    pub accent: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            paid: Color::Red,
            pending: Color::Yellow,
            valid: Color::Green,
            used: GREY,

            title: Color::Red,
            accent: Color::Yellow,

            border: GREY,
            border_focused: Color::Yellow,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::DarkGrey,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Color of the PAID / PENDING badge
    pub fn payment_color(&self, is_paid: bool) -> Color {
        if is_paid { self.paid } else { self.pending }
    }

    /// Color of the USED / VALID badge
    pub fn entry_color(&self, is_used: bool) -> Color {
        if is_used { self.used } else { self.valid }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
