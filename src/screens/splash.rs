//! Splash screen: logo, tagline and the "Get Started" button.
//!
//! The auto-advance timer lives in the flow controller; this screen only
//! reports the explicit confirmation.

use crate::components::Footer;
use crate::controller::Intent;
use crate::data::intro::{MOTTO, SPLASH_TAGLINE};
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::widgets::ZwicklyLogo;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

#[derive(Debug, Default)]
pub struct SplashScreen;

impl SplashScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let logo = ZwicklyLogo::fitting(body.height.saturating_sub(8));
        let [logo_row, _, tagline, _, motto, _, button] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(body);

        let [logo_area] = Layout::horizontal([Constraint::Length(logo.width())])
            .flex(Flex::Center)
            .areas(logo_row);
        frame.render_widget(logo, logo_area);

        frame.render_widget(
            Paragraph::new(SPLASH_TAGLINE)
                .style(t.emphasis_style())
                .alignment(Alignment::Center),
            tagline,
        );
        frame.render_widget(
            Paragraph::new(MOTTO.join("\n"))
                .style(t.muted_style())
                .alignment(Alignment::Center),
            motto,
        );
        frame.render_widget(
            Paragraph::new(Line::styled("  Get Started  ", t.button_style()))
                .alignment(Alignment::Center),
            button,
        );

        Footer::render(
            frame,
            footer,
            &format!("{}: Get Started | ?: Help | q: Quit", ctx.keymap.confirm_display()),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        Ok(match ctx.keymap.action_for(key) {
            Some(Action::Confirm | Action::ToggleSelect) => {
                ScreenAction::Intent(Intent::ConfirmSplash)
            }
            _ => ScreenAction::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::SessionState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    #[test]
    fn test_enter_confirms() {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, Instant::now());
        let mut screen = SplashScreen::new();

        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            screen.handle_event(enter, &ctx).unwrap(),
            ScreenAction::Intent(Intent::ConfirmSplash)
        );
        let other = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(screen.handle_event(other, &ctx).unwrap(), ScreenAction::None);
    }
}
