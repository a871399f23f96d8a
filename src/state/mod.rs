//! Session state types.
//!
//! The flow stage, the main-app screen, the logged-in role and the selected
//! event together describe which view is visible. They live in a single
//! [`SessionState`] owned by the [`FlowController`](crate::controller::FlowController);
//! screens only ever see it by shared reference.
//!
//! ```text
//!  Splash ──▶ Onboarding ──▶ Login ──▶ Main ─┐
//!    ▲                                        │
//!    └──────────────── logout ────────────────┘
//! ```

pub mod session;

pub use session::SessionState;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sample event.
pub type EventId = u32;

/// Top-level onboarding/auth phase preceding the tabbed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FlowStage {
    #[default]
    Splash,
    Onboarding,
    Login,
    Main,
}

impl FlowStage {
    pub fn name(&self) -> &'static str {
        match self {
            FlowStage::Splash => "splash",
            FlowStage::Onboarding => "onboarding",
            FlowStage::Login => "login",
            FlowStage::Main => "main",
        }
    }
}

/// Tab-level views available once inside the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Events,
    EventDetails,
    Social,
    Assistant,
    MenuSchedule,
    Notifications,
    Profile,
}

impl Screen {
    /// Screens reachable from the bottom navigation bar, in display order.
    pub const NAV_TABS: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Events,
        Screen::Social,
        Screen::Assistant,
        Screen::Profile,
    ];

    /// Label used in headers and the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Home",
            Screen::Events => "Events",
            Screen::EventDetails => "Event",
            Screen::Social => "Social",
            Screen::Assistant => "Pixi",
            Screen::MenuSchedule => "Mensa & Schedule",
            Screen::Notifications => "Notifications",
            Screen::Profile => "Profile",
        }
    }

    /// Whether the bottom navigation bar is drawn under this screen.
    pub fn shows_bottom_nav(&self) -> bool {
        *self != Screen::EventDetails
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role chosen on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Admin,
    AssistantMode,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Admin, UserRole::AssistantMode];

    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Admin => "Admin",
            UserRole::AssistantMode => "Pixi",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Student => "Access your campus life",
            UserRole::Admin => "Manage campus content",
            UserRole::AssistantMode => "AI Assistant Mode",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The single view the app should render right now.
///
/// Derived from [`SessionState`]; the app remounts its screen controller
/// whenever this value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveView {
    Splash,
    Onboarding,
    Login,
    Main(Screen),
}
