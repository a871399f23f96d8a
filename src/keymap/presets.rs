//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl on top of the arrows
    Vim,
    /// Ctrl+N/P/B/F on top of the arrows
    Emacs,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_motion(),
            KeymapPreset::Vim => vim_motion(),
            KeymapPreset::Emacs => emacs_motion(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

fn standard_motion() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("esc", Action::Cancel),
    ]
}

fn vim_motion() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::GoToTop),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("shift+g", Action::GoToEnd),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("esc", Action::Cancel),
    ]
}

fn emacs_motion() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("alt+<", Action::GoToTop),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("alt+>", Action::GoToEnd),
        KeyBinding::new("end", Action::GoToEnd),
        // C-g cancels in emacs
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("esc", Action::Cancel),
    ]
}

/// Bindings every preset agrees on.
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("1", Action::TabHome),
        KeyBinding::new("2", Action::TabEvents),
        KeyBinding::new("3", Action::TabSocial),
        KeyBinding::new("4", Action::TabAssistant),
        KeyBinding::new("5", Action::TabProfile),
        KeyBinding::new("n", Action::OpenNotifications),
        KeyBinding::new("s", Action::Skip),
        KeyBinding::new("d", Action::Delete),
        KeyBinding::new("a", Action::MarkAllRead),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("backtab", Action::PrevTab),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_covers_core_actions() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in [
                Action::MoveUp,
                Action::MoveDown,
                Action::MoveLeft,
                Action::MoveRight,
                Action::Confirm,
                Action::Cancel,
                Action::Quit,
                Action::Help,
                Action::TabProfile,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} preset is missing {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        for (key, action) in [
            ("h", Action::MoveLeft),
            ("j", Action::MoveDown),
            ("k", Action::MoveUp),
            ("l", Action::MoveRight),
        ] {
            assert!(bindings.iter().any(|b| b.key == key && b.action == action));
        }
    }

    #[test]
    fn test_emacs_has_ctrl_np() {
        let bindings = KeymapPreset::Emacs.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+n" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+p" && b.action == Action::MoveUp));
    }

    #[test]
    fn test_preset_serde() {
        assert_eq!(serde_json::to_string(&KeymapPreset::Vim).unwrap(), "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }
}
