//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// Everything a key press can mean, independent of which key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,

    // Selection
    /// Activate the highlighted item / submit
    Confirm,
    /// Go back or leave an input
    Cancel,
    /// Toggle the highlighted item (like, join, preference switch)
    ToggleSelect,

    // Global
    Quit,
    Help,

    // Bottom navigation
    TabHome,
    TabEvents,
    TabSocial,
    TabAssistant,
    TabProfile,
    OpenNotifications,

    // Screen actions
    /// Skip the onboarding slides
    Skip,
    Delete,
    MarkAllRead,

    // Tabs inside a screen (filters, Mensa/Timetable)
    NextTab,
    PrevTab,
}

impl Action {
    /// Human-readable description for the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Previous / left",
            Action::MoveRight => "Next / right",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Open / confirm",
            Action::Cancel => "Back",
            Action::ToggleSelect => "Toggle (like, join, switch)",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::TabHome => "Home",
            Action::TabEvents => "Events",
            Action::TabSocial => "Social",
            Action::TabAssistant => "Ask Pixi",
            Action::TabProfile => "Profile",
            Action::OpenNotifications => "Notifications",
            Action::Skip => "Skip intro",
            Action::Delete => "Delete",
            Action::MarkAllRead => "Mark all as read",
            Action::NextTab => "Next tab",
            Action::PrevTab => "Previous tab",
        }
    }

    /// Group heading in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect => "Selection",

            Action::Quit | Action::Help => "Global",

            Action::TabHome
            | Action::TabEvents
            | Action::TabSocial
            | Action::TabAssistant
            | Action::TabProfile
            | Action::OpenNotifications => "Screens",

            Action::Skip | Action::Delete | Action::MarkAllRead => "Actions",

            Action::NextTab | Action::PrevTab => "Tabs",
        }
    }

    /// Bottom-navigation target for the tab shortcuts
    pub fn nav_target(&self) -> Option<crate::state::Screen> {
        use crate::state::Screen;
        match self {
            Action::TabHome => Some(Screen::Dashboard),
            Action::TabEvents => Some(Screen::Events),
            Action::TabSocial => Some(Screen::Social),
            Action::TabAssistant => Some(Screen::Assistant),
            Action::TabProfile => Some(Screen::Profile),
            Action::OpenNotifications => Some(Screen::Notifications),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::TabSocial.category(), "Screens");
        assert_eq!(Action::MarkAllRead.category(), "Actions");
    }

    #[test]
    fn test_nav_targets() {
        assert_eq!(Action::TabAssistant.nav_target(), Some(Screen::Assistant));
        assert_eq!(
            Action::OpenNotifications.nav_target(),
            Some(Screen::Notifications)
        );
        assert_eq!(Action::Confirm.nav_target(), None);
    }

    #[test]
    fn test_action_serde_names() {
        assert_eq!(
            serde_json::to_string(&Action::MarkAllRead).unwrap(),
            "\"mark_all_read\""
        );
        let action: Action = serde_json::from_str("\"tab_profile\"").unwrap();
        assert_eq!(action, Action::TabProfile);
    }
}
