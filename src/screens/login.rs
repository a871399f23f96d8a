//! Login: an email form that reveals the role cards.
//!
//! Any non-blank email is accepted. "Continue with Google" submits the same
//! form. Picking a role logs in.

use crate::components::Footer;
use crate::controller::Intent;
use crate::data::intro::MOTTO;
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::UserRole;
use crate::styles::theme;
use crate::utils::{centered_column, wrap_index, TextInput};
use crate::widgets::{Menu, MenuItem, MenuState, TextInputWidget, TextInputWidgetExt, ZwicklyLogo};
use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::debug;

const EMAIL_PLACEHOLDER: &str = "university@email.com";

/// Focusable parts of the email form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    EmailButton,
    GoogleButton,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 3] = [
        LoginFocus::Email,
        LoginFocus::EmailButton,
        LoginFocus::GoogleButton,
    ];

    fn step(self, forward: bool) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[wrap_index(i, Self::ORDER.len(), forward)]
    }
}

#[derive(Debug)]
pub struct LoginScreen {
    email: TextInput,
    focus: LoginFocus,
    show_roles: bool,
    roles: MenuState,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        let mut roles = MenuState::new();
        roles.select(Some(0));
        Self {
            email: TextInput::new(),
            focus: LoginFocus::Email,
            show_roles: false,
            roles,
        }
    }

    pub fn email(&self) -> &str {
        self.email.text()
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    pub fn shows_roles(&self) -> bool {
        self.show_roles
    }

    /// Reveal the role cards if an email was entered.
    fn submit_email(&mut self) {
        if self.email.is_blank() {
            debug!("Empty email ignored");
            return;
        }
        self.show_roles = true;
    }

    fn selected_role(&self) -> UserRole {
        UserRole::ALL[self.roles.selected().unwrap_or(0)]
    }

    fn role_icon(role: UserRole, icons: &Icons) -> &'static str {
        match role {
            UserRole::Student => icons.user(),
            UserRole::Admin => icons.settings(),
            UserRole::AssistantMode => icons.robot(),
        }
    }

    fn handle_email_form(&mut self, event: &Event, ctx: &ScreenContext) -> ScreenAction {
        let Some(key) = key_press(event) else {
            return ScreenAction::None;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.step(true);
                return ScreenAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.step(false);
                return ScreenAction::None;
            }
            KeyCode::Enter => {
                self.submit_email();
                return ScreenAction::None;
            }
            _ => {}
        }

        if self.focus == LoginFocus::Email {
            if key.code == KeyCode::Esc {
                self.focus = LoginFocus::EmailButton;
            } else {
                self.email.handle_key(key);
            }
            return ScreenAction::None;
        }

        match ctx.keymap.action_for(key) {
            Some(Action::Confirm | Action::ToggleSelect) => self.submit_email(),
            Some(Action::MoveUp) => self.focus = self.focus.step(false),
            Some(Action::MoveDown) => self.focus = self.focus.step(true),
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_roles(&mut self, event: &Event, ctx: &ScreenContext) -> ScreenAction {
        let Some(key) = key_press(event) else {
            return ScreenAction::None;
        };
        let current = self.roles.selected().unwrap_or(0);
        match ctx.keymap.action_for(key) {
            Some(Action::MoveUp) => {
                self.roles.select(Some(current.saturating_sub(1)));
            }
            Some(Action::MoveDown) => {
                self.roles.select(Some((current + 1).min(UserRole::ALL.len() - 1)));
            }
            Some(Action::Confirm | Action::ToggleSelect) => {
                return ScreenAction::Intent(Intent::Login(self.selected_role()));
            }
            Some(Action::Cancel) => {
                self.show_roles = false;
                self.focus = LoginFocus::Email;
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn render_email_form(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let [input, _, email_button, google_button] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .title("Email")
                .placeholder(EMAIL_PLACEHOLDER)
                .focused(self.focus == LoginFocus::Email),
            input,
        );

        let button = |label: &str, focused: bool, primary: bool| {
            let style = if focused {
                t.button_style()
            } else if primary {
                t.title_style()
            } else {
                t.text_style()
            };
            Line::styled(format!("  {}  ", label), style).alignment(Alignment::Center)
        };
        frame.render_widget(
            button("Continue with Email", self.focus == LoginFocus::EmailButton, true),
            email_button,
        );
        frame.render_widget(
            button("Continue with Google", self.focus == LoginFocus::GoogleButton, false),
            google_button,
        );
    }

    fn render_roles(&mut self, frame: &mut Frame, area: Rect, icons: &Icons) {
        let t = theme();
        let [title, menu_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new("Select Your Role")
                .style(t.title_style())
                .alignment(Alignment::Center),
            title,
        );
        let items = UserRole::ALL
            .iter()
            .map(|role| {
                MenuItem::new(Self::role_icon(*role, icons), role.title()).info(role.description())
            })
            .collect();
        frame.render_stateful_widget(Menu::new(items), menu_area, &mut self.roles);
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let logo = ZwicklyLogo::fitting(body.height.saturating_sub(14));
        let [logo_row, _, welcome, motto, _, form] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(11),
        ])
        .flex(Flex::Center)
        .areas(centered_column(body, 50));

        let [logo_area] = Layout::horizontal([Constraint::Length(logo.width())])
            .flex(Flex::Center)
            .areas(logo_row);
        frame.render_widget(logo, logo_area);
        frame.render_widget(
            Paragraph::new("Welcome to Zwickly")
                .style(t.emphasis_style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            welcome,
        );
        frame.render_widget(
            Paragraph::new(MOTTO[0])
                .style(t.muted_style())
                .alignment(Alignment::Center),
            motto,
        );

        let hint = if self.show_roles {
            self.render_roles(frame, form, ctx.icons);
            format!(
                "{}: Select | {}: Log in | {}: Change email",
                ctx.keymap.navigation_display(),
                ctx.keymap.confirm_display(),
                ctx.keymap.back_display()
            )
        } else {
            self.render_email_form(frame, form);
            "Tab: Next field | Enter: Continue | Esc: Leave input".to_string()
        };
        Footer::render(frame, footer, &hint);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(if self.show_roles {
            self.handle_roles(&event, ctx)
        } else {
            self.handle_email_form(&event, ctx)
        })
    }

    fn is_input_focused(&self) -> bool {
        !self.show_roles && self.focus == LoginFocus::Email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::SessionState;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn press(screen: &mut LoginScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, Instant::now());
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_blank_email_is_ignored() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "   ");
        press(&mut screen, KeyCode::Enter);
        assert!(!screen.shows_roles());
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_email_reveals_roles_and_login() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "antman@student.whz.de");
        assert_eq!(screen.email(), "antman@student.whz.de");
        press(&mut screen, KeyCode::Enter);
        assert!(screen.shows_roles());
        assert!(!screen.is_input_focused());

        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Intent(Intent::Login(UserRole::Admin))
        );
    }

    #[test]
    fn test_typing_q_goes_into_the_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "q");
        assert_eq!(screen.email(), "q");
    }

    #[test]
    fn test_google_button_needs_email_too() {
        let mut screen = LoginScreen::new();
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.focus(), LoginFocus::GoogleButton);
        press(&mut screen, KeyCode::Char(' '));
        assert!(!screen.shows_roles());

        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "a@b.de");
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Char(' '));
        assert!(screen.shows_roles());
    }

    #[test]
    fn test_esc_returns_from_roles() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "x");
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Esc);
        assert!(!screen.shows_roles());
        assert_eq!(screen.email(), "x");
    }
}
