//! Theme and style system
//!
//! Zwickly's violet/cyan palette for dark and light terminals, plus a
//! colorless fallback.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Selection indicator shown next to the highlighted list item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

const VIOLET: Color = Color::Rgb(0x7B, 0x5C, 0xFA);
const CYAN: Color = Color::Rgb(0x48, 0xE0, 0xE4);

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: VIOLET,
    secondary: CYAN,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: CYAN,
    border: Color::DarkGray,
    border_focused: VIOLET,
    highlight_bg: Color::Rgb(0x2A, 0x22, 0x4D),
});

/// Replace the global theme (startup, or `--theme` / `--no-colors`)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// No colors at all (`NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Brand violet: titles, focused borders, primary buttons
    pub primary: Color,
    /// Brand cyan: badges, progress, accents
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: VIOLET,
            secondary: CYAN,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: CYAN,
            border: Color::DarkGray,
            border_focused: VIOLET,
            highlight_bg: Color::Rgb(0x2A, 0x22, 0x4D),
        }
    }

    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: VIOLET,
            // Brand cyan is unreadable on white
            secondary: Color::Rgb(0x0E, 0x8A, 0x8E),
            success: Color::Rgb(0x15, 0x80, 0x3D),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: VIOLET,
            border: Color::Gray,
            border_focused: VIOLET,
            highlight_bg: Color::Rgb(0xE9, 0xE3, 0xFE),
        }
    }

    /// Style helpers below never set fg/bg in this mode.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    fn colorless(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    pub fn title_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.colorless() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn emphasis_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Cyan accent for badges and counters
    pub fn accent_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.colorless() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Selected row in lists and the active navigation tab
    pub fn highlight_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled primary button
    pub fn button_style(&self) -> Style {
        if self.colorless() {
            return Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}
