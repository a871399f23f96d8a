//! Zwickly - campus life in your terminal
//!
//! A terminal rendition of the Zwickly campus app: splash, onboarding and
//! login flow followed by tabbed screens for events, the social wall, the
//! Pixi assistant, mensa menu and timetable, notifications and the profile.
//! All content is built-in sample data.

// Core modules
pub mod app;
pub mod assistant;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod data;
pub mod icons;
pub mod keymap;
pub mod scheduler;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use controller::{FlowController, Intent};
pub use state::{ActiveView, FlowStage, Screen, SessionState, UserRole};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
