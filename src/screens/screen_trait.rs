//! Screen trait and associated types.
//!
//! Screens own their local state, render from read-only context, and report
//! what should happen next as a [`ScreenAction`]. They never mutate the
//! session; flow changes travel up as [`Intent`]s.

use crate::config::Config;
use crate::controller::Intent;
use crate::icons::Icons;
use crate::keymap::{Action, Keymap};
use crate::state::SessionState;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

/// Read-only resources for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub keymap: &'a Keymap,
    pub session: &'a SessionState,
    pub icons: &'a Icons,
    /// Constant shown on the Profile tab
    pub notification_badge: u32,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a Config,
        session: &'a SessionState,
        icons: &'a Icons,
        notification_badge: u32,
    ) -> Self {
        Self {
            config,
            keymap: &config.keymap,
            session,
            icons,
            notification_badge,
        }
    }
}

/// Read-only resources for event handling.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub keymap: &'a Keymap,
    pub session: &'a SessionState,
    /// Time the event was received; screens schedule relative to it.
    pub now: Instant,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, session: &'a SessionState, now: Instant) -> Self {
        Self {
            config,
            keymap: &config.keymap,
            session,
            now,
        }
    }

    /// Keymap action for a key press. Releases and repeats map to nothing.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.keymap.action_for(key)
    }
}

/// What a screen wants after handling an event or a tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenAction {
    /// Stay put.
    #[default]
    None,
    /// Forward to the flow controller.
    Intent(Intent),
    ShowToast(Toast),
    /// Announce an external link; nothing is opened.
    OpenExternal(&'static str),
    ShowHelp,
    Quit,
}

/// A mounted view.
///
/// A fresh instance is built each time its view becomes active, so local
/// state (toggles, input, transcript) lives exactly as long as the view.
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// While true, global shortcuts (tabs, quit, help) are not applied so
    /// the user can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Advance local timers.
    fn tick(&mut self, _now: Instant) -> ScreenAction {
        ScreenAction::None
    }
}

/// Key event helper shared by the screens: presses only.
pub(crate) fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}
