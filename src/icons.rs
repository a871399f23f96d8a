//! Icon provider.
//!
//! NerdFonts, Unicode emoji and ASCII sets. The `ZWICKLY_ICONS` environment
//! variable wins over the config value; "auto" guesses from the terminal.

use std::env;

const ICONS_ENV: &str = "ZWICKLY_ICONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// Requires a NerdFont-patched font
    NerdFonts,
    Unicode,
    /// Maximum compatibility
    Ascii,
}

impl IconSet {
    pub fn detect() -> Self {
        if let Ok(icons) = env::var(ICONS_ENV) {
            return Self::parse(&icons).unwrap_or(IconSet::Unicode);
        }
        if Self::likely_supports_nerd_fonts() {
            IconSet::NerdFonts
        } else {
            IconSet::Unicode
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => Some(IconSet::NerdFonts),
            "unicode" | "emoji" => Some(IconSet::Unicode),
            "ascii" | "plain" => Some(IconSet::Ascii),
            _ => None,
        }
    }

    fn likely_supports_nerd_fonts() -> bool {
        env::var("TERM_PROGRAM").is_ok_and(|term| {
            matches!(
                term.as_str(),
                "iTerm.app" | "WezTerm" | "Alacritty" | "kitty" | "Ghostty"
            )
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconSet::NerdFonts => "NerdFonts",
            IconSet::Unicode => "Unicode",
            IconSet::Ascii => "ASCII",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Icons {
    icon_set: IconSet,
}

macro_rules! icon {
    ($(#[$doc:meta])* $name:ident, $nerd:expr, $unicode:expr, $ascii:expr) => {
        $(#[$doc])*
        pub fn $name(&self) -> &'static str {
            match self.icon_set {
                IconSet::NerdFonts => $nerd,
                IconSet::Unicode => $unicode,
                IconSet::Ascii => $ascii,
            }
        }
    };
}

impl Icons {
    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    /// Priority: `ZWICKLY_ICONS` > config value > auto-detect
    pub fn from_config(config: &crate::config::Config) -> Self {
        if env::var(ICONS_ENV).is_ok() {
            return Self::with_icon_set(IconSet::detect());
        }
        Self::with_icon_set(config.get_icon_set())
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    // Navigation bar
    icon!(home, "\u{f015}", "🏠", "[H]");
    icon!(calendar, "\u{f073}", "📅", "[C]");
    icon!(users, "\u{f0c0}", "👥", "[S]");
    icon!(robot, "\u{f06a9}", "🤖", "[P]");
    icon!(user, "\u{f007}", "👤", "[U]");

    // Content
    icon!(location, "\u{f041}", "📍", "@");
    icon!(clock, "\u{f017}", "🕒", "~");
    icon!(utensils, "\u{f0f5}", "🍽", "[M]");
    icon!(bell, "\u{f0f3}", "🔔", "[!]");
    icon!(comment, "\u{f075}", "💬", "c");
    icon!(
        /// Filled heart for liked posts
        heart,
        "\u{f004}",
        "♥",
        "<3"
    );
    icon!(heart_outline, "\u{f08a}", "♡", "<>");
    icon!(sparkle, "\u{f005}", "✨", "*");

    // Status
    icon!(success, "\u{f058}", "✅", "[OK]");
    icon!(info, "\u{f05a}", "ℹ", "[i]");
    icon!(warning, "\u{f071}", "⚠", "[!]");
    icon!(error, "\u{f057}", "❌", "[X]");
    icon!(check, "\u{f00c}", "✓", "[x]");
    icon!(unread, "\u{f111}", "●", "*");

    // Profile menu
    icon!(settings, "\u{f013}", "⚙", "[=]");
    icon!(shield, "\u{f132}", "🛡", "[#]");
    icon!(help, "\u{f059}", "❓", "[?]");
    icon!(logout, "\u{f08b}", "⏏", "[<-");
    icon!(toggle_on, "\u{f205}", "◉", "[ON ]");
    icon!(toggle_off, "\u{f204}", "○", "[OFF]");

    icon!(back, "\u{f060}", "←", "<-");
    icon!(external, "\u{f08e}", "↗", "^");
    icon!(send, "\u{f1d8}", "➤", ">");
}
