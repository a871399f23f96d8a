//! Social wall: a feed of post cards with local likes.

use crate::components::{Footer, Header};
use crate::data::dashboard::USER;
use crate::data::posts::{sample_posts, Post};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tracing::debug;

pub struct SocialScreen {
    posts: Vec<Post>,
    selected: usize,
    /// First post drawn; follows the selection
    offset: usize,
}

impl Default for SocialScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialScreen {
    pub fn new() -> Self {
        Self {
            posts: sample_posts(),
            selected: 0,
            offset: 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn toggle_like(&mut self) {
        if let Some(post) = self.posts.get_mut(self.selected) {
            post.toggle_like();
            debug!(post_id = post.id, liked = post.liked, likes = post.likes, "Like toggled");
        }
    }

    /// Card height for `post` at `width` columns: borders, author line,
    /// wrapped content (plus one line of slack for word breaks), actions.
    fn card_height(post: &Post, width: u16) -> u16 {
        let inner = width.saturating_sub(4).max(1) as usize;
        let content = post.content.chars().count().div_ceil(inner) as u16 + 1;
        2 + 1 + content + 1
    }

    fn scroll_to_selection(&mut self, area: Rect) {
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        loop {
            let used: u16 = self.posts[self.offset..=self.selected]
                .iter()
                .map(|p| Self::card_height(p, area.width))
                .sum();
            if used <= area.height || self.offset == self.selected {
                break;
            }
            self.offset += 1;
        }
    }

    fn render_composer(frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("({}) ", USER.name.chars().next().unwrap_or('?')),
                    t.accent_style(),
                ),
                Span::styled(format!("What's on your mind, {}?", USER.name), t.muted_style()),
            ]))
            .block(block),
            area,
        );
    }

    fn render_post(frame: &mut Frame, area: Rect, post: &Post, selected: bool, icons: &Icons) {
        let t = theme();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if selected {
                t.border_focused_style()
            } else {
                t.border_style()
            })
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [author, content, actions] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Line::from(vec![
                Span::styled(post.author, t.text_style().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", post.timestamp), t.muted_style()),
            ]),
            author,
        );
        frame.render_widget(
            Paragraph::new(post.content)
                .style(t.text_style())
                .wrap(Wrap { trim: true }),
            content,
        );
        let heart = if post.liked {
            Span::styled(format!("{} {}", icons.heart(), post.likes), t.error_style())
        } else {
            Span::styled(format!("{} {}", icons.heart_outline(), post.likes), t.muted_style())
        };
        frame.render_widget(
            Line::from(vec![
                heart,
                Span::styled(format!("   {} {}", icons.comment(), post.comments), t.muted_style()),
            ]),
            actions,
        );
    }
}

impl Screen for SocialScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        Header::render(frame, header, "Social Wall", "Connect with your campus community", None);

        let [composer, feed] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(content);
        Self::render_composer(frame, composer);

        if !self.posts.is_empty() {
            self.scroll_to_selection(feed);
            let mut y = feed.y;
            for (i, post) in self.posts.iter().enumerate().skip(self.offset) {
                let height = Self::card_height(post, feed.width);
                if y + height > feed.bottom() {
                    break;
                }
                let card = Rect::new(feed.x, y, feed.width, height);
                Self::render_post(frame, card, post, i == self.selected, ctx.icons);
                y += height;
            }
        }

        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Select | Space: Like | ?: Help",
                ctx.keymap.navigation_display()
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let last = self.posts.len().saturating_sub(1);
        match ctx.keymap.action_for(key) {
            Some(Action::MoveUp) => self.selected = self.selected.saturating_sub(1),
            Some(Action::MoveDown) => self.selected = (self.selected + 1).min(last),
            Some(Action::GoToTop) => self.selected = 0,
            Some(Action::GoToEnd) => self.selected = last,
            Some(Action::ToggleSelect | Action::Confirm) => self.toggle_like(),
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}
