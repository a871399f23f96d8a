//! Mensa menu and timetable, on two tabs.

use crate::components::{Footer, Header};
use crate::data::campus::{
    classes_scheduled_label, sample_menu, sample_timetable, ClassKind, ClassSession, Diet, MenuItem,
    MENSA_LOCATION, OPENING_HOURS, SPECIAL_OFFER, TIMETABLE_DAY,
};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, Theme};
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampusTab {
    #[default]
    Mensa,
    Timetable,
}

impl CampusTab {
    fn index(self) -> usize {
        match self {
            CampusTab::Mensa => 0,
            CampusTab::Timetable => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            CampusTab::Mensa => CampusTab::Timetable,
            CampusTab::Timetable => CampusTab::Mensa,
        }
    }
}

pub struct MenuScheduleScreen {
    menu: Vec<MenuItem>,
    timetable: Vec<ClassSession>,
    tab: CampusTab,
    scroll: u16,
}

impl Default for MenuScheduleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScheduleScreen {
    pub fn new() -> Self {
        Self {
            menu: sample_menu(),
            timetable: sample_timetable(),
            tab: CampusTab::default(),
            scroll: 0,
        }
    }

    pub fn tab(&self) -> CampusTab {
        self.tab
    }

    fn switch_tab(&mut self) {
        self.tab = self.tab.other();
        self.scroll = 0;
    }

    fn diet_style(t: &Theme, diet: Diet) -> Style {
        match diet {
            Diet::Vegan | Diet::Vegetarian => t.success_style(),
            Diet::Meat => t.error_style(),
            Diet::Fish => t.accent_style(),
        }
    }

    fn kind_style(t: &Theme, kind: ClassKind) -> Style {
        match kind {
            ClassKind::Lecture => t.title_style(),
            ClassKind::Lab => t.accent_style(),
            ClassKind::Workshop => t.warning_style(),
        }
    }

    fn mensa_lines(&self, icons: &Icons) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} Special Offer  ", icons.sparkle()), t.accent_style()),
                Span::styled(SPECIAL_OFFER, t.text_style()),
            ]),
            Line::from(""),
        ];
        for item in &self.menu {
            lines.push(Line::from(vec![
                Span::styled(item.dish, t.text_style().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  [{}]", item.diet.label()), Self::diet_style(&t, item.diet)),
            ]));
            lines.push(Line::styled(format!("  {}", item.price), t.emphasis_style()));
            lines.push(Line::styled(
                format!("  Allergens: {}", item.allergens.join(", ")),
                t.muted_style(),
            ));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} Opening Hours  ", icons.clock()), t.title_style()),
            Span::styled(OPENING_HOURS, t.text_style()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icons.location()), t.title_style()),
            Span::styled(MENSA_LOCATION, t.muted_style()),
        ]));
        lines
    }

    fn timetable_lines(&self, icons: &Icons) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = vec![
            Line::styled(TIMETABLE_DAY, t.title_style()),
            Line::styled(classes_scheduled_label(self.timetable.len()), t.muted_style()),
            Line::from(""),
        ];
        for class in &self.timetable {
            lines.push(Line::from(vec![
                Span::styled(class.subject, t.text_style().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  [{}]", class.kind.label()),
                    Self::kind_style(&t, class.kind),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", icons.clock()), t.accent_style()),
                Span::styled(class.time, t.text_style()),
                Span::styled(format!("  {} ", icons.location()), t.accent_style()),
                Span::styled(class.room, t.text_style()),
            ]));
            lines.push(Line::styled(format!("  {}", class.professor), t.muted_style()));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Screen for MenuScheduleScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        Header::render(frame, header, "Mensa & Schedule", "Today's menu and your classes", None);

        let [tabs_area, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(content);
        let tabs = Tabs::new(vec![
            format!("{} Mensa Menu", ctx.icons.utensils()),
            format!("{} Timetable", ctx.icons.calendar()),
        ])
        .select(self.tab.index())
        .style(t.muted_style())
        .highlight_style(t.highlight_style())
        .divider("|")
        .block(Block::default().borders(Borders::BOTTOM).border_style(t.border_style()));
        frame.render_widget(tabs, tabs_area);

        let lines = match self.tab {
            CampusTab::Mensa => self.mensa_lines(ctx.icons),
            CampusTab::Timetable => self.timetable_lines(ctx.icons),
        };
        let max_scroll = (lines.len() as u16).saturating_sub(body.height.saturating_sub(2));
        self.scroll = self.scroll.min(max_scroll);
        frame.render_widget(
            Paragraph::new(lines).scroll((self.scroll, 0)).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style()),
            ),
            body,
        );

        Footer::render(
            frame,
            footer,
            &format!(
                "Tab/←/→: Switch tab | {}: Scroll | ?: Help",
                ctx.keymap.navigation_display()
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.keymap.action_for(key) {
            Some(Action::NextTab | Action::PrevTab | Action::MoveLeft | Action::MoveRight) => {
                self.switch_tab()
            }
            Some(Action::MoveDown) => self.scroll = self.scroll.saturating_add(1),
            Some(Action::MoveUp) => self.scroll = self.scroll.saturating_sub(1),
            Some(Action::GoToTop) => self.scroll = 0,
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}
