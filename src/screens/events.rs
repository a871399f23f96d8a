//! Campus events list with filter tabs.

use crate::components::{Footer, Header};
use crate::controller::Intent;
use crate::data::events::{sample_events, Event as CampusEvent};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, wrap_index, ListStateExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Tabs};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Joined,
    Upcoming,
    /// Shows every event; there are no dates to compare against.
    Past,
}

impl EventFilter {
    pub const ALL: [EventFilter; 4] = [
        EventFilter::All,
        EventFilter::Joined,
        EventFilter::Upcoming,
        EventFilter::Past,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventFilter::All => "All",
            EventFilter::Joined => "Joined",
            EventFilter::Upcoming => "Upcoming",
            EventFilter::Past => "Past",
        }
    }

    pub fn matches(&self, event: &CampusEvent) -> bool {
        match self {
            EventFilter::Joined => event.joined,
            EventFilter::Upcoming => !event.joined,
            EventFilter::All | EventFilter::Past => true,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn step(self, forward: bool) -> Self {
        Self::ALL[wrap_index(self.index(), Self::ALL.len(), forward)]
    }
}

pub struct EventsScreen {
    events: Vec<CampusEvent>,
    filter: EventFilter,
    list_state: ListState,
}

impl Default for EventsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsScreen {
    pub fn new() -> Self {
        Self::with_events(sample_events())
    }

    pub fn with_events(events: Vec<CampusEvent>) -> Self {
        let mut list_state = ListState::default();
        list_state.clamp_to(events.len());
        Self {
            events,
            filter: EventFilter::default(),
            list_state,
        }
    }

    pub fn filter(&self) -> EventFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
        self.list_state.select(None);
        let len = self.visible().len();
        self.list_state.clamp_to(len);
    }

    /// Events passing the current filter, in sample order.
    pub fn visible(&self) -> Vec<&CampusEvent> {
        self.events.iter().filter(|e| self.filter.matches(e)).collect()
    }

    pub fn selected_event(&self) -> Option<&CampusEvent> {
        self.list_state
            .selected()
            .and_then(|i| self.visible().get(i).copied())
    }

    /// Flip the join flag of the highlighted event.
    fn toggle_join(&mut self) {
        let Some(id) = self.selected_event().map(|e| e.id) else {
            return;
        };
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.joined = !event.joined;
            debug!(event_id = id, joined = event.joined, "Join toggled");
        }
        let len = self.visible().len();
        self.list_state.clamp_to(len);
    }

    fn event_item(event: &CampusEvent, icons: &Icons) -> ListItem<'static> {
        let t = theme();
        let mut title = vec![
            Span::styled(event.title, t.text_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [{}]", event.category.label()), t.muted_style()),
        ];
        if event.joined {
            title.push(Span::styled(format!("  {} Joined", icons.check()), t.success_style()));
        }
        ListItem::new(vec![
            Line::from(title),
            Line::from(vec![
                Span::styled(format!("  {} ", icons.calendar()), t.accent_style()),
                Span::styled(event.date, t.text_style()),
                Span::styled(format!("  {} ", icons.clock()), t.accent_style()),
                Span::styled(event.time, t.text_style()),
            ]),
            Line::from(vec![
                Span::styled(format!("  {} ", icons.location()), t.accent_style()),
                Span::styled(event.location, t.text_style()),
                Span::styled(format!("  {} ", icons.users()), t.accent_style()),
                Span::styled(format!("{} attendees", event.attendees), t.text_style()),
            ]),
            Line::from(""),
        ])
    }
}

impl Screen for EventsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        Header::render(frame, header, "Campus Events", "Discover and join exciting events", None);

        let [tabs_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(content);
        let tabs = Tabs::new(EventFilter::ALL.iter().map(|f| f.label()))
            .select(self.filter.index())
            .style(t.muted_style())
            .highlight_style(t.highlight_style())
            .divider("|")
            .block(Block::default().borders(Borders::BOTTOM).border_style(t.border_style()));
        frame.render_widget(tabs, tabs_area);

        let items: Vec<ListItem> = self
            .visible()
            .into_iter()
            .map(|e| Self::event_item(e, ctx.icons))
            .collect();
        if items.is_empty() {
            frame.render_widget(
                Paragraph::new("No events match this filter")
                    .style(t.muted_style())
                    .alignment(Alignment::Center)
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(t.border_style()),
                    ),
                list_area,
            );
        } else {
            let list = List::new(items)
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            frame.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Select | {}: Details | Space: Join | Tab: Filter | ?: Help",
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
        let len = self.visible().len();
        if self.list_state.apply_navigation(action, len) {
            return Ok(ScreenAction::None);
        }
        match action {
            Action::NextTab | Action::MoveRight => self.set_filter(self.filter.step(true)),
            Action::PrevTab | Action::MoveLeft => self.set_filter(self.filter.step(false)),
            Action::ToggleSelect => self.toggle_join(),
            Action::Confirm => {
                if let Some(event) = self.selected_event() {
                    return Ok(ScreenAction::Intent(Intent::SelectEvent(event.id)));
                }
            }
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

    fn press(screen: &mut EventsScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, Instant::now());
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    fn visible_ids(screen: &EventsScreen) -> Vec<u32> {
        screen.visible().iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_filters() {
        let mut screen = EventsScreen::new();
        assert_eq!(visible_ids(&screen), vec![1, 2, 3, 4, 5]);
        screen.set_filter(EventFilter::Joined);
        assert_eq!(visible_ids(&screen), vec![2, 5]);
        screen.set_filter(EventFilter::Upcoming);
        assert_eq!(visible_ids(&screen), vec![1, 3, 4]);
        screen.set_filter(EventFilter::Past);
        assert_eq!(visible_ids(&screen).len(), 5);
    }

    #[test]
    fn test_tab_cycles_filters() {
        let mut screen = EventsScreen::new();
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.filter(), EventFilter::Joined);
        press(&mut screen, KeyCode::BackTab);
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.filter(), EventFilter::Past);
    }

    #[test]
    fn test_enter_selects_highlighted_event() {
        let mut screen = EventsScreen::new();
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Intent(Intent::SelectEvent(3))
        );
    }

    #[test]
    fn test_join_toggle_moves_event_between_filters() {
        let mut screen = EventsScreen::new();
        press(&mut screen, KeyCode::Char(' '));
        screen.set_filter(EventFilter::Joined);
        assert_eq!(visible_ids(&screen), vec![1, 2, 5]);

        // Un-joining the last visible event keeps the selection in range
        press(&mut screen, KeyCode::End);
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(visible_ids(&screen), vec![1, 2]);
        assert_eq!(screen.selected_event().map(|e| e.id), Some(2));
    }
}
