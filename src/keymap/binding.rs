//! A key string bound to an action.
//!
//! Key strings look like "j", "down", "ctrl+n" or "shift+tab". Unknown names
//! are kept as written and simply never match.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
    /// Shown in the help overlay instead of the action's description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Key code plus modifiers, as crossterm reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Drop SHIFT from printable non-letter keys.
    ///
    /// Terminals disagree on whether '?' or BackTab arrive with SHIFT set.
    /// Letters keep it because "shift+g" and "g" are different bindings.
    pub fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => Self {
                code: self.code,
                modifiers: self.modifiers.difference(KeyModifiers::SHIFT),
            },
            KeyCode::BackTab => Self {
                code: self.code,
                modifiers: self.modifiers.difference(KeyModifiers::SHIFT),
            },
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: self.modifiers | KeyModifiers::SHIFT,
            },
            _ => self,
        }
    }
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let pressed = ParsedKey { code, modifiers }.normalized();
        self.parse()
            .is_ok_and(|parsed| parsed.normalized() == pressed)
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Display form, e.g. "Ctrl+N"
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse "ctrl+shift+n" style strings.
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    // "+" on its own is a key, not a separator
    let (mods, last) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    Ok(ParsedKey {
        code: parse_key_code(last.trim())?,
        modifiers,
    })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..]
                .parse()
                .map_err(|_| format!("Unknown key: {}", key))?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// "ctrl+n" -> "Ctrl+N", "down" -> "↓"
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => "Ctrl".to_string(),
            "alt" | "option" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            "super" | "meta" | "cmd" => "Cmd".to_string(),
            "up" => "↑".to_string(),
            "down" => "↓".to_string(),
            "left" => "←".to_string(),
            "right" => "→".to_string(),
            "enter" | "return" => "Enter".to_string(),
            "esc" | "escape" => "Esc".to_string(),
            "space" => "Space".to_string(),
            "tab" => "Tab".to_string(),
            "backtab" => "Shift+Tab".to_string(),
            "pageup" | "pgup" => "PgUp".to_string(),
            "pagedown" | "pgdn" => "PgDn".to_string(),
            "home" => "Home".to_string(),
            "end" => "End".to_string(),
            p => p.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_named_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("down").unwrap().code, KeyCode::Down);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("1").unwrap().code, KeyCode::Char('1'));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+shift+n").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('n'));
        assert_eq!(
            parsed.modifiers,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        );
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        let parsed = parse_key_string("ctrl++").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('+'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("banana").is_err());
        assert!(!KeyBinding::new("banana", Action::Quit)
            .matches(KeyCode::Char('b'), KeyModifiers::NONE));
    }

    #[test]
    fn test_question_mark_matches_with_or_without_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
    }

    #[test]
    fn test_uppercase_letter_matches_shift_binding() {
        let binding = KeyBinding::new("shift+g", Action::GoToEnd);
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(!binding.matches(KeyCode::Char('g'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+n"), "Ctrl+N");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("enter"), "Enter");
        assert_eq!(format_key_display("f1"), "F1");
    }
}
