//! Student dashboard: greeting, carousel, quick actions and recent updates.

use crate::components::{Footer, Header};
use crate::controller::Intent;
use crate::data::dashboard::{
    carousel, quick_actions, recent_updates, CarouselItem, Link, QuickAction, RecentUpdate,
    GREETING, RECENT_UPDATES_BADGE, TODAY, USER,
};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::Screen as ScreenId;
use crate::styles::theme;
use crate::utils::{create_standard_layout, wrap_index};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

/// What following a dashboard link means for the app.
pub(crate) fn follow(link: Link) -> ScreenAction {
    match link {
        Link::Screen(screen) => ScreenAction::Intent(Intent::Navigate(screen)),
        Link::External(url) => ScreenAction::OpenExternal(url),
    }
}

pub struct DashboardScreen {
    carousel: Vec<CarouselItem>,
    quick_actions: Vec<QuickAction>,
    updates: Vec<RecentUpdate>,
    carousel_index: usize,
    /// Index over quick actions followed by recent updates
    selected: usize,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            carousel: carousel(),
            quick_actions: quick_actions(),
            updates: recent_updates(),
            carousel_index: 0,
            selected: 0,
        }
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel_index
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn item_count(&self) -> usize {
        self.quick_actions.len() + self.updates.len()
    }

    fn selected_link(&self) -> Option<Link> {
        if self.selected < self.quick_actions.len() {
            self.quick_actions.get(self.selected).map(|a| a.link)
        } else {
            self.updates
                .get(self.selected - self.quick_actions.len())
                .map(|u| u.link)
        }
    }

    fn quick_action_icon(action: &QuickAction, icons: &Icons) -> &'static str {
        match action.link {
            Link::Screen(ScreenId::MenuSchedule) => icons.calendar(),
            Link::Screen(ScreenId::Assistant) => icons.robot(),
            Link::Screen(_) => icons.sparkle(),
            Link::External(_) => icons.users(),
        }
    }

    fn render_carousel(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let Some(item) = self.carousel.get(self.carousel_index) else {
            return;
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let dots: Vec<Span> = (0..self.carousel.len())
            .map(|i| {
                if i == self.carousel_index {
                    Span::styled("━━ ", t.accent_style())
                } else {
                    Span::styled("· ", t.muted_style())
                }
            })
            .collect();
        let text = vec![
            Line::from(vec![
                Span::styled(format!("{} ", ctx.icons.back()), t.muted_style()),
                Span::styled(item.title, t.title_style()),
                Span::styled(format!(" {}", ctx.icons.external()), t.muted_style()),
            ]),
            Line::styled(item.description, t.text_style()),
            Line::from(dots),
        ];
        frame.render_widget(
            Paragraph::new(text).block(block).alignment(Alignment::Center),
            area,
        );
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect, icons: &Icons) {
        let t = theme();
        let n = self.quick_actions.len() as u32;
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, n.max(1)); self.quick_actions.len()])
                .spacing(1)
                .split(area);
        for (i, (action, cell)) in self.quick_actions.iter().zip(cells.iter()).enumerate() {
            let selected = self.selected == i;
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(if selected {
                    t.border_focused_style()
                } else {
                    t.border_style()
                });
            let style = if selected {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let label = format!("{} {}", Self::quick_action_icon(action, icons), action.label);
            frame.render_widget(
                Paragraph::new(label)
                    .style(style)
                    .alignment(Alignment::Center)
                    .block(block),
                *cell,
            );
        }
    }

    fn render_updates(&self, frame: &mut Frame, area: Rect, icons: &Icons) {
        let t = theme();
        let [heading, list] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Line::from(vec![
                Span::styled("Recent Updates  ", t.title_style()),
                Span::styled(format!(" {} ", RECENT_UPDATES_BADGE), t.accent_style()),
            ]),
            heading,
        );

        let mut lines = Vec::new();
        for (i, update) in self.updates.iter().enumerate() {
            let selected = self.selected == self.quick_actions.len() + i;
            let marker = if selected { "▌ " } else { "  " };
            let title_style = if selected {
                t.highlight_style()
            } else {
                t.text_style().add_modifier(Modifier::BOLD)
            };
            let mut title = vec![
                Span::styled(marker, t.border_focused_style()),
                Span::styled(update.title, title_style),
            ];
            if update.is_new {
                title.push(Span::styled(format!(" {}", icons.unread()), t.accent_style()));
            }
            if let Link::External(_) = update.link {
                title.push(Span::styled(format!(" {}", icons.external()), t.muted_style()));
            }
            lines.push(Line::from(title));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(update.subtitle, t.muted_style()),
            ]));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines), list);
    }
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        Header::render(
            frame,
            header,
            &format!("{} {}", GREETING, USER.name),
            TODAY,
            None,
        );

        let [carousel_area, _, actions_area, _, updates_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(content);
        self.render_carousel(frame, carousel_area, ctx);
        self.render_quick_actions(frame, actions_area, ctx.icons);
        self.render_updates(frame, updates_area, ctx.icons);

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Select | ←/→: Carousel | {}: Open | 1-5: Tabs | ?: Help",
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
        let count = self.item_count();
        match ctx.keymap.action_for(key) {
            Some(Action::MoveLeft) => {
                self.carousel_index = wrap_index(self.carousel_index, self.carousel.len(), false);
            }
            Some(Action::MoveRight) => {
                self.carousel_index = wrap_index(self.carousel_index, self.carousel.len(), true);
            }
            Some(Action::MoveUp) => self.selected = self.selected.saturating_sub(1),
            Some(Action::MoveDown) => {
                self.selected = (self.selected + 1).min(count.saturating_sub(1))
            }
            Some(Action::GoToTop) => self.selected = 0,
            Some(Action::GoToEnd) => self.selected = count.saturating_sub(1),
            Some(Action::Confirm) => {
                if let Some(link) = self.selected_link() {
                    return Ok(follow(link));
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}
