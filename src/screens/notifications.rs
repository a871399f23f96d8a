//! Notification inbox: read markers, delete, mark all as read.

use crate::components::{Footer, Header};
use crate::data::notifications::{
    sample_notifications, unread_count, Notification, NotificationKind,
};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, ListStateExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use tracing::debug;

pub struct NotificationsScreen {
    notifications: Vec<Notification>,
    list_state: ListState,
}

impl Default for NotificationsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self::with_notifications(sample_notifications())
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        let mut list_state = ListState::default();
        list_state.clamp_to(notifications.len());
        Self {
            notifications,
            list_state,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn mark_selected_read(&mut self) {
        if let Some(n) = self
            .list_state
            .selected()
            .and_then(|i| self.notifications.get_mut(i))
        {
            n.read = true;
        }
    }

    /// Remove exactly the highlighted notification.
    fn delete_selected(&mut self) {
        let Some(i) = self.list_state.selected() else {
            return;
        };
        if i < self.notifications.len() {
            let removed = self.notifications.remove(i);
            debug!(id = removed.id, "Notification deleted");
            self.list_state.clamp_to(self.notifications.len());
        }
    }

    fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    fn kind_icon(kind: NotificationKind, icons: &Icons) -> &'static str {
        match kind {
            NotificationKind::Success => icons.success(),
            NotificationKind::Info => icons.info(),
            NotificationKind::Reminder => icons.clock(),
            NotificationKind::Message => icons.comment(),
        }
    }

    fn item(n: &Notification, icons: &Icons) -> ListItem<'static> {
        let t = theme();
        let marker = if n.read {
            Span::raw("  ")
        } else {
            Span::styled(format!("{} ", icons.unread()), t.accent_style())
        };
        let title_style = if n.read {
            t.text_style()
        } else {
            t.text_style().add_modifier(Modifier::BOLD)
        };
        ListItem::new(vec![
            Line::from(vec![
                marker,
                Span::styled(format!("{} ", Self::kind_icon(n.kind, icons)), t.title_style()),
                Span::styled(n.title, title_style),
            ]),
            Line::styled(format!("    {}", n.message), t.text_style()),
            Line::styled(format!("    {}", n.timestamp), t.muted_style()),
            Line::from(""),
        ])
    }

    fn render_empty(frame: &mut Frame, area: Rect, icons: &Icons) {
        let t = theme();
        let [body] = Layout::vertical([Constraint::Length(4)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(icons.bell(), t.muted_style()),
                Line::styled("No notifications", t.title_style()),
                Line::styled(
                    "You're all caught up! We'll notify you when something new happens.",
                    t.muted_style(),
                ),
            ])
            .alignment(Alignment::Center),
            body,
        );
    }
}

impl Screen for NotificationsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let unread = self.unread();
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        let status = (unread > 0).then(|| format!("{} new", unread));
        Header::render(
            frame,
            header,
            "Notifications",
            "Stay updated with campus activities",
            status.as_deref(),
        );

        if self.notifications.is_empty() {
            Self::render_empty(frame, content, ctx.icons);
        } else {
            let [mark_all, list_area] = Layout::vertical([
                Constraint::Length(if unread > 0 { 2 } else { 0 }),
                Constraint::Min(0),
            ])
            .areas(content);
            if unread > 0 {
                frame.render_widget(
                    Line::from(vec![
                        Span::styled(format!("{} ", ctx.icons.check()), t.accent_style()),
                        Span::styled("Mark all as read (a)", t.accent_style()),
                    ]),
                    mark_all,
                );
            }
            let items: Vec<ListItem> = self
                .notifications
                .iter()
                .map(|n| Self::item(n, ctx.icons))
                .collect();
            let list = List::new(items)
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            frame.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Select | {}: Mark read | d: Delete | a: Mark all read | ?: Help",
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
        if self.list_state.apply_navigation(action, self.notifications.len()) {
            return Ok(ScreenAction::None);
        }
        match action {
            Action::Confirm | Action::ToggleSelect => self.mark_selected_read(),
            Action::Delete => self.delete_selected(),
            Action::MarkAllRead if self.unread() > 0 => self.mark_all_read(),
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::SessionState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn press(screen: &mut NotificationsScreen, code: KeyCode) {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, Instant::now());
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap();
    }

    #[test]
    fn test_select_marks_read() {
        let mut screen = NotificationsScreen::new();
        assert_eq!(screen.unread(), 3);
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.unread(), 2);
        assert!(screen.notifications()[1].read);
        assert!(!screen.notifications()[0].read);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut screen = NotificationsScreen::new();
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Char('d'));
        let ids: Vec<u32> = screen.notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6]);
        assert_eq!(screen.selected(), Some(1));
    }

    #[test]
    fn test_delete_all_leaves_empty_state() {
        let mut screen = NotificationsScreen::new();
        press(&mut screen, KeyCode::End);
        for _ in 0..6 {
            press(&mut screen, KeyCode::Char('d'));
        }
        assert!(screen.notifications().is_empty());
        assert_eq!(screen.selected(), None);
        // Nothing left to delete
        press(&mut screen, KeyCode::Char('d'));
        assert!(screen.notifications().is_empty());
    }

    #[test]
    fn test_mark_all_read() {
        let mut screen = NotificationsScreen::new();
        press(&mut screen, KeyCode::Char('a'));
        assert_eq!(screen.unread(), 0);
        assert_eq!(screen.notifications().len(), 6);
    }
}
