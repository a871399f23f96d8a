//! Details for one event: schedule, attendance and the join button.

use crate::components::Footer;
use crate::controller::Intent;
use crate::data::events::{find_event, sample_events, Event as CampusEvent};
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::EventId;
use crate::styles::theme;
use crate::utils::create_standard_layout;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Gauge, Padding, Paragraph, Wrap};
use tracing::{info, warn};

pub struct EventDetailsScreen {
    event_id: Option<EventId>,
    event: Option<CampusEvent>,
    /// Local to this mount; starts unjoined whatever the list shows.
    joined: bool,
    scroll: u16,
}

impl EventDetailsScreen {
    pub fn new(event_id: Option<EventId>) -> Self {
        let event = event_id.and_then(|id| find_event(&sample_events(), id).cloned());
        if event.is_none() {
            warn!(?event_id, "Event details requested for unknown event");
        }
        Self {
            event_id,
            event,
            joined: false,
            scroll: 0,
        }
    }

    pub fn event(&self) -> Option<&CampusEvent> {
        self.event.as_ref()
    }

    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// One-way join. The first press shows a toast; later presses do nothing.
    fn join(&mut self) -> ScreenAction {
        if self.joined || self.event.is_none() {
            return ScreenAction::None;
        }
        self.joined = true;
        info!(event_id = ?self.event_id, "Joined event");
        ScreenAction::ShowToast(Toast::success("Successfully joined the event!"))
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.warning_style())
            .title(" Event not found ");
        let message = match self.event_id {
            Some(id) => format!("There is no event with id {}.", id),
            None => "No event selected.".to_string(),
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(t.muted_style())
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }

    fn render_event(
        &self,
        frame: &mut Frame,
        area: Rect,
        event: &CampusEvent,
        ctx: &RenderContext,
    ) {
        let t = theme();
        let icons = ctx.icons;
        let [title_area, info_area, gauge_area, _, button_area, _, description_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);

        let title = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(Line::styled(
                format!(" {} ", event.category.label()),
                t.accent_style(),
            ))
            .padding(Padding::horizontal(1));
        frame.render_widget(
            Paragraph::new(event.title).style(t.title_style()).block(title),
            title_area,
        );

        let row = |icon: &'static str, label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{} ", icon), t.accent_style()),
                Span::styled(format!("{:<10}", label), t.muted_style()),
                Span::styled(value, t.text_style()),
            ])
        };
        let info = vec![
            row(icons.calendar(), "Date", event.date.to_string()),
            row(icons.clock(), "Time", event.details.time_range.to_string()),
            row(icons.location(), "Location", event.location.to_string()),
            row(icons.comment(), "Language", event.details.language.to_string()),
            row(icons.user(), "Organizer", event.details.organizer.to_string()),
        ];
        frame.render_widget(
            Paragraph::new(info).block(Block::default().padding(Padding::horizontal(1))),
            info_area,
        );

        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style())
                    .title(format!(" {} Attendance ", icons.users())),
            )
            .gauge_style(t.accent_style())
            .ratio(event.fill_ratio())
            .label(format!(
                "{}/{} attending",
                event.attendees, event.details.max_attendees
            ));
        frame.render_widget(gauge, gauge_area);

        let button = if self.joined {
            Line::styled(
                format!("  {} Joined  ", icons.check()),
                t.success_style().add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled("  Join Event  ", t.button_style())
        };
        frame.render_widget(button.alignment(Alignment::Center), button_area);

        let about = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(" About this event ")
            .padding(Padding::horizontal(1));
        frame.render_widget(
            Paragraph::new(event.details.description)
                .style(t.text_style())
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0))
                .block(about),
            description_area,
        );
    }
}

impl Screen for EventDetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, 1, 1);
        frame.render_widget(
            Line::from(vec![
                Span::styled(format!("{} ", ctx.icons.back()), t.accent_style()),
                Span::styled("Back to events", t.muted_style()),
            ]),
            header,
        );

        match &self.event {
            Some(event) => self.render_event(frame, content, event, ctx),
            None => self.render_not_found(frame, content),
        }

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Join | {}: Scroll | {}: Back | ?: Help",
                ctx.keymap.confirm_display(),
                ctx.keymap.navigation_display(),
                ctx.keymap.back_display()
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        Ok(match ctx.keymap.action_for(key) {
            Some(Action::Confirm | Action::ToggleSelect) => self.join(),
            Some(Action::Cancel | Action::MoveLeft) => ScreenAction::Intent(Intent::Back),
            Some(Action::MoveDown) => {
                self.scroll = self.scroll.saturating_add(1);
                ScreenAction::None
            }
            Some(Action::MoveUp) => {
                self.scroll = self.scroll.saturating_sub(1);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        })
    }
}
