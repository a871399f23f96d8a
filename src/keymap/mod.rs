//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset. Overriding an action hides every preset
    /// binding for that action.
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.get_action(key.code, key.modifiers)
    }

    /// Overrides first, then preset bindings whose action is not overridden
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action`
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| format!("{:?}", action), KeyBinding::display)
    }

    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }

    pub fn confirm_display(&self) -> String {
        self.get_key_display_for_action(Action::Confirm)
    }

    pub fn back_display(&self) -> String {
        self.get_key_display_for_action(Action::Cancel)
    }

    /// Footer hint shared by list screens
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}: Navigate | {}: Open | {}: Back | ?: Help",
            self.navigation_display(),
            self.confirm_display(),
            self.back_display()
        )
    }
}
