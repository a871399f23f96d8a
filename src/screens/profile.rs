//! Profile: user card, local preferences, general menu and logout.

use crate::components::{Footer, Header};
use crate::controller::Intent;
use crate::data::dashboard::USER;
use crate::data::intro::MOTTO;
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{Screen as ScreenId, UserRole};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, ListStateExt};
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEntry {
    PushNotifications,
    DarkMode,
    AccountSettings,
    PrivacySecurity,
    HelpSupport,
    Notifications,
    Logout,
}

impl ProfileEntry {
    pub const ALL: [ProfileEntry; 7] = [
        ProfileEntry::PushNotifications,
        ProfileEntry::DarkMode,
        ProfileEntry::AccountSettings,
        ProfileEntry::PrivacySecurity,
        ProfileEntry::HelpSupport,
        ProfileEntry::Notifications,
        ProfileEntry::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileEntry::PushNotifications => "Push Notifications",
            ProfileEntry::DarkMode => "Dark Mode",
            ProfileEntry::AccountSettings => "Account Settings",
            ProfileEntry::PrivacySecurity => "Privacy & Security",
            ProfileEntry::HelpSupport => "Help & Support",
            ProfileEntry::Notifications => "Notifications",
            ProfileEntry::Logout => "Logout",
        }
    }

    fn icon(&self, icons: &Icons) -> &'static str {
        match self {
            ProfileEntry::PushNotifications | ProfileEntry::Notifications => icons.bell(),
            ProfileEntry::DarkMode => icons.sparkle(),
            ProfileEntry::AccountSettings => icons.settings(),
            ProfileEntry::PrivacySecurity => icons.shield(),
            ProfileEntry::HelpSupport => icons.help(),
            ProfileEntry::Logout => icons.logout(),
        }
    }
}

pub struct ProfileScreen {
    push_notifications: bool,
    dark_mode: bool,
    list_state: ListState,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            push_notifications: true,
            dark_mode: false,
            list_state,
        }
    }

    pub fn push_notifications(&self) -> bool {
        self.push_notifications
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn selected_entry(&self) -> Option<ProfileEntry> {
        self.list_state
            .selected()
            .and_then(|i| ProfileEntry::ALL.get(i).copied())
    }

    /// Role label for the user card. Student until a role is chosen.
    pub fn role_label(role: Option<UserRole>) -> &'static str {
        role.unwrap_or(UserRole::Student).title()
    }

    fn activate(&mut self, entry: ProfileEntry) -> ScreenAction {
        match entry {
            ProfileEntry::PushNotifications => {
                self.push_notifications = !self.push_notifications;
                ScreenAction::None
            }
            ProfileEntry::DarkMode => {
                // Local preference only; the terminal theme is set at startup
                self.dark_mode = !self.dark_mode;
                ScreenAction::None
            }
            ProfileEntry::AccountSettings
            | ProfileEntry::PrivacySecurity
            | ProfileEntry::HelpSupport => ScreenAction::ShowToast(Toast::info(format!(
                "{} is not available in this prototype",
                entry.label()
            ))),
            ProfileEntry::Notifications => {
                ScreenAction::Intent(Intent::Navigate(ScreenId::Notifications))
            }
            ProfileEntry::Logout => ScreenAction::Intent(Intent::Logout),
        }
    }

    fn render_user_card(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let initial = USER.name.chars().next().unwrap_or('?');
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let text = vec![
            Line::from(vec![
                Span::styled(format!("({}) ", initial), t.accent_style()),
                Span::styled(USER.name, t.title_style()),
            ]),
            Line::styled(USER.email, t.muted_style()),
            Line::from(vec![
                Span::styled(
                    format!("{} {}", ctx.icons.user(), Self::role_label(ctx.session.role())),
                    t.emphasis_style(),
                ),
                Span::styled("  ·  ", t.muted_style()),
                Span::styled(format!("ID: {}", USER.student_id), t.text_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
    }

    fn entry_item(&self, entry: ProfileEntry, ctx: &RenderContext) -> ListItem<'static> {
        let t = theme();
        let icons = ctx.icons;
        let mut spans = vec![
            Span::styled(format!("{} ", entry.icon(icons)), t.title_style()),
            Span::styled(
                entry.label(),
                if entry == ProfileEntry::Logout {
                    t.error_style()
                } else {
                    t.text_style()
                },
            ),
        ];
        let toggle = |on: bool| {
            if on {
                Span::styled(format!("  {}", icons.toggle_on()), t.success_style())
            } else {
                Span::styled(format!("  {}", icons.toggle_off()), t.muted_style())
            }
        };
        match entry {
            ProfileEntry::PushNotifications => spans.push(toggle(self.push_notifications)),
            ProfileEntry::DarkMode => spans.push(toggle(self.dark_mode)),
            ProfileEntry::Notifications if ctx.notification_badge > 0 => spans.push(
                Span::styled(format!("  {}", ctx.notification_badge), t.accent_style()),
            ),
            _ => {}
        }
        ListItem::new(Line::from(spans))
    }

    fn render_entries(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let mut items = vec![ListItem::new(Line::styled("Preferences", t.muted_style()))];
        let mut rows = Vec::with_capacity(ProfileEntry::ALL.len());
        for entry in ProfileEntry::ALL {
            match entry {
                ProfileEntry::AccountSettings => {
                    items.push(ListItem::new(""));
                    items.push(ListItem::new(Line::styled("General", t.muted_style())));
                }
                ProfileEntry::Logout => items.push(ListItem::new("")),
                _ => {}
            }
            rows.push(items.len());
            items.push(self.entry_item(entry, ctx));
        }

        // Section headings are not selectable; map the entry index onto its row
        let mut view_state = ListState::default();
        view_state.select(self.list_state.selected().and_then(|i| rows.get(i).copied()));
        let list = List::new(items)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut view_state);
    }

    fn render_about(frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut lines = vec![Line::styled(
            format!("Zwickly v{}", env!("CARGO_PKG_VERSION")),
            t.text_style(),
        )];
        lines.extend(MOTTO.iter().map(|m| Line::styled(*m, t.muted_style())));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

impl Screen for ProfileScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        Header::render(frame, header, "Profile", "Manage your account settings", None);

        let [card, entries, about] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(MOTTO.len() as u16 + 1),
        ])
        .areas(content);
        self.render_user_card(frame, card, ctx);
        self.render_entries(frame, entries, ctx);
        Self::render_about(frame, about);

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Select | {}: Open | Space: Toggle | ?: Help",
                ctx.keymap.navigation_display(),
                ctx.keymap.confirm_display()
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let Some(action) = ctx.keymap.action_for(key) else {
            return Ok(ScreenAction::None);
        };
        if self
            .list_state
            .apply_navigation(action, ProfileEntry::ALL.len())
        {
            return Ok(ScreenAction::None);
        }
        match action {
            Action::Confirm | Action::ToggleSelect => Ok(self
                .selected_entry()
                .map_or(ScreenAction::None, |entry| self.activate(entry))),
            _ => Ok(ScreenAction::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::icons::{IconSet, Icons};
    use crate::state::SessionState;
    use crate::widgets::ToastVariant;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn press(screen: &mut ProfileScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, Instant::now());
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    fn select(screen: &mut ProfileScreen, entry: ProfileEntry) {
        press(screen, KeyCode::Home);
        let index = ProfileEntry::ALL.iter().position(|e| *e == entry).unwrap();
        for _ in 0..index {
            press(screen, KeyCode::Down);
        }
        assert_eq!(screen.selected_entry(), Some(entry));
    }

    #[test]
    fn test_toggles_are_local() {
        let mut screen = ProfileScreen::new();
        assert!(screen.push_notifications());
        assert!(!screen.dark_mode());

        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
        assert!(!screen.push_notifications());

        select(&mut screen, ProfileEntry::DarkMode);
        press(&mut screen, KeyCode::Char(' '));
        assert!(screen.dark_mode());
    }

    #[test]
    fn test_general_entries_show_info_toasts() {
        for entry in [
            ProfileEntry::AccountSettings,
            ProfileEntry::PrivacySecurity,
            ProfileEntry::HelpSupport,
        ] {
            let mut screen = ProfileScreen::new();
            select(&mut screen, entry);
            match press(&mut screen, KeyCode::Enter) {
                ScreenAction::ShowToast(toast) => {
                    assert_eq!(toast.variant, ToastVariant::Info);
                    assert!(toast.message.contains(entry.label()));
                }
                other => panic!("expected toast, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_notifications_and_logout_intents() {
        let mut screen = ProfileScreen::new();
        select(&mut screen, ProfileEntry::Notifications);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Intent(Intent::Navigate(ScreenId::Notifications))
        );
        select(&mut screen, ProfileEntry::Logout);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Intent(Intent::Logout)
        );
    }

    #[test]
    fn test_role_label_defaults_to_student() {
        assert_eq!(ProfileScreen::role_label(None), "Student");
        assert_eq!(ProfileScreen::role_label(Some(UserRole::Admin)), "Admin");
    }

    #[test]
    fn test_render_shows_version_and_user() {
        let config = Config::default();
        let session = SessionState::new();
        let icons = Icons::with_icon_set(IconSet::Ascii);
        let ctx = RenderContext::new(&config, &session, &icons, 3);
        let mut screen = ProfileScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(70, 40)).unwrap();
        terminal
            .draw(|frame| {
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("antman@student.whz.de"));
        assert!(text.contains("ID: 252035"));
        assert!(text.contains(&format!("Zwickly v{}", env!("CARGO_PKG_VERSION"))));
    }
}
