//! Card-style menu: each item is three lines tall, with a bar marking the
//! selected card. Used for role cards, quick actions and the profile menu.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const CARD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: String,
    pub text: String,
    /// Dimmed text after the label, e.g. "Access your campus life"
    pub info: Option<String>,
    /// Right-aligned badge, e.g. "3 New"
    pub badge: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            info: None,
            badge: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Lines needed to draw every card.
    pub fn height(&self) -> u16 {
        self.items.len() as u16 * CARD_HEIGHT
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16 * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.bottom() {
                break;
            }

            let selected = state.selected == Some(i);
            let base = if selected {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let bar = if selected {
                Span::styled("▌", t.border_focused_style())
            } else {
                Span::raw(" ")
            };

            // Padding rows carry the selection bar and background
            let padding = Line::from(vec![bar.clone()]).style(base);
            for dy in [0, 2] {
                buf.set_style(Rect::new(area.x, y + dy, area.width, 1), base);
                padding.clone().render(Rect::new(area.x, y + dy, area.width, 1), buf);
            }

            let mut spans = vec![
                bar,
                Span::raw(" "),
                Span::styled(format!("{} ", item.icon), t.title_style()),
                Span::raw(item.text.clone()),
            ];
            if let Some(info) = &item.info {
                spans.push(Span::styled(format!("  {}", info), t.muted_style()));
            }

            let row = Rect::new(area.x, y + 1, area.width, 1);
            buf.set_style(row, base);
            Line::from(spans).style(base).render(row, buf);

            if let Some(badge) = &item.badge {
                let badge = format!(" {} ", badge);
                let width = badge.chars().count() as u16;
                if width + 2 < area.width {
                    let x = area.right() - width - 1;
                    buf.set_string(x, y + 1, badge, t.accent_style());
                }
            }
        }
    }
}
