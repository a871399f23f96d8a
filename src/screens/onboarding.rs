//! Onboarding: three slides with progress dots.

use crate::components::Footer;
use crate::controller::Intent;
use crate::data::intro::{Slide, SLIDES};
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

#[derive(Debug, Default)]
pub struct OnboardingScreen {
    slide: usize,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    fn is_last(&self) -> bool {
        self.slide + 1 == SLIDES.len()
    }

    fn current(&self) -> &'static Slide {
        &SLIDES[self.slide]
    }

    /// "Next" on every slide but the last, which completes onboarding.
    fn next(&mut self) -> ScreenAction {
        if self.is_last() {
            ScreenAction::Intent(Intent::CompleteOnboarding)
        } else {
            self.slide += 1;
            ScreenAction::None
        }
    }

    fn button_label(&self) -> &'static str {
        if self.is_last() {
            "Get Started"
        } else {
            "Next"
        }
    }

    fn dots(&self) -> Line<'static> {
        let t = theme();
        let spans: Vec<Span> = (0..SLIDES.len())
            .map(|i| {
                if i == self.slide {
                    Span::styled("━━━ ", t.accent_style())
                } else {
                    Span::styled("• ", t.muted_style())
                }
            })
            .collect();
        Line::from(spans)
    }
}

impl Screen for OnboardingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [card, _, dots, _, button] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(crate::utils::centered_column(body, 60));

        let slide = self.current();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(Line::styled(
                format!(" {}/{} ", self.slide + 1, SLIDES.len()),
                t.muted_style(),
            ))
            .padding(Padding::uniform(1));
        let text = vec![
            Line::styled(slide.title, t.title_style()),
            Line::from(""),
            Line::styled(slide.description, t.text_style()),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            card,
        );

        frame.render_widget(self.dots().alignment(Alignment::Center), dots);
        frame.render_widget(
            Line::styled(format!("  {}  ", self.button_label()), t.button_style())
                .alignment(Alignment::Center),
            button,
        );

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: {} | s: Skip | ?: Help",
                ctx.keymap.confirm_display(),
                self.button_label()
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        Ok(match ctx.keymap.action_for(key) {
            Some(Action::Confirm | Action::MoveRight) => self.next(),
            Some(Action::MoveLeft) => {
                self.slide = self.slide.saturating_sub(1);
                ScreenAction::None
            }
            Some(Action::Skip) => ScreenAction::Intent(Intent::CompleteOnboarding),
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

    fn press(screen: &mut OnboardingScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, Instant::now());
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_next_walks_slides_then_completes() {
        let mut screen = OnboardingScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
        assert_eq!(screen.slide(), 2);
        assert_eq!(screen.button_label(), "Get Started");
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Intent(Intent::CompleteOnboarding)
        );
    }

    #[test]
    fn test_skip_completes_from_first_slide() {
        let mut screen = OnboardingScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Char('s')),
            ScreenAction::Intent(Intent::CompleteOnboarding)
        );
    }

    #[test]
    fn test_left_stops_at_first_slide() {
        let mut screen = OnboardingScreen::new();
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.slide(), 0);
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.slide(), 0);
    }
}
