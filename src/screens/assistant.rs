//! Chat with Pixi.
//!
//! The transcript and pending replies belong to this screen; leaving the tab
//! drops them, including replies still in flight.

use crate::assistant::{Assistant, ChatMessage, Sender, QUICK_QUESTIONS};
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{create_standard_layout, wrap_text, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use std::time::Instant;

/// Where keys go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatFocus {
    Input,
    QuickQuestions,
    /// Scrolling the transcript; global shortcuts are live.
    Transcript,
}

/// First transcript row to show so the view ends `scroll_back` lines above
/// the bottom. Saturates for transcripts taller than the terminal can address.
fn scroll_offset(overflow: usize, scroll_back: usize) -> u16 {
    u16::try_from(overflow.saturating_sub(scroll_back)).unwrap_or(u16::MAX)
}

pub struct AssistantScreen {
    assistant: Assistant,
    input: TextInput,
    focus: ChatFocus,
    questions: ListState,
    /// Lines scrolled up from the bottom of the transcript
    scroll_back: usize,
}

impl AssistantScreen {
    pub fn new(assistant: Assistant) -> Self {
        let mut questions = ListState::default();
        questions.select(Some(0));
        Self {
            assistant,
            input: TextInput::new(),
            focus: ChatFocus::Input,
            questions,
            scroll_back: 0,
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn focus(&self) -> ChatFocus {
        self.focus
    }

    fn send(&mut self, now: Instant) {
        let text = self.input.take();
        if self.assistant.send(&text, now) {
            self.scroll_back = 0;
            if !self.assistant.shows_quick_questions() && self.focus == ChatFocus::QuickQuestions {
                self.focus = ChatFocus::Input;
            }
        }
    }

    fn pick_quick_question(&mut self) {
        let i = self.questions.selected().unwrap_or(0);
        if let Some(question) = QUICK_QUESTIONS.get(i) {
            self.input.set_text(*question);
            self.focus = ChatFocus::Input;
        }
    }

    fn handle_input_key(&mut self, event: &Event, ctx: &ScreenContext) {
        let Some(key) = key_press(event) else {
            return;
        };
        match key.code {
            KeyCode::Enter => self.send(ctx.now),
            KeyCode::Esc => self.focus = ChatFocus::Transcript,
            KeyCode::Tab | KeyCode::Up if self.assistant.shows_quick_questions() => {
                self.focus = ChatFocus::QuickQuestions;
            }
            KeyCode::Tab => self.focus = ChatFocus::Transcript,
            _ => {
                self.input.handle_key(key);
            }
        }
    }

    fn handle_questions_key(&mut self, event: &Event, ctx: &ScreenContext) {
        let Some(key) = key_press(event) else {
            return;
        };
        let selected = self.questions.selected().unwrap_or(0);
        match ctx.keymap.action_for(key) {
            Some(Action::MoveUp) => self.questions.select(Some(selected.saturating_sub(1))),
            Some(Action::MoveDown) if selected + 1 < QUICK_QUESTIONS.len() => {
                self.questions.select(Some(selected + 1));
            }
            Some(Action::MoveDown | Action::NextTab) => self.focus = ChatFocus::Input,
            Some(Action::Confirm | Action::ToggleSelect) => self.pick_quick_question(),
            Some(Action::Cancel) => self.focus = ChatFocus::Transcript,
            _ => {}
        }
    }

    fn handle_transcript_key(&mut self, event: &Event, ctx: &ScreenContext) {
        let Some(key) = key_press(event) else {
            return;
        };
        match ctx.keymap.action_for(key) {
            Some(Action::MoveUp) => self.scroll_back += 1,
            Some(Action::MoveDown) => self.scroll_back = self.scroll_back.saturating_sub(1),
            Some(Action::PageUp) => self.scroll_back += 5,
            Some(Action::PageDown) => self.scroll_back = self.scroll_back.saturating_sub(5),
            Some(Action::GoToEnd) => self.scroll_back = 0,
            Some(Action::Confirm | Action::NextTab) => self.focus = ChatFocus::Input,
            _ => {}
        }
    }

    fn message_lines(message: &ChatMessage, width: u16) -> Vec<Line<'static>> {
        let t = theme();
        let bubble = (width as usize * 3 / 4).max(10);
        let (name, alignment, style) = match message.sender {
            Sender::User => ("You", Alignment::Right, t.emphasis_style()),
            Sender::Pixi => ("Pixi", Alignment::Left, t.text_style()),
        };
        let mut lines = vec![Line::styled(name, t.muted_style()).alignment(alignment)];
        lines.extend(
            wrap_text(&message.text, bubble)
                .into_iter()
                .map(|l| Line::styled(l, style).alignment(alignment)),
        );
        lines.push(Line::from(""));
        lines
    }

    fn render_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if self.focus == ChatFocus::Transcript {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        let inner = block.inner(area);

        let mut lines: Vec<Line> = self
            .assistant
            .transcript()
            .iter()
            .flat_map(|m| Self::message_lines(m, inner.width))
            .collect();
        if self.assistant.is_typing() {
            lines.push(Line::styled(
                "Pixi is typing…",
                t.muted_style().add_modifier(Modifier::ITALIC),
            ));
        }

        let overflow = lines.len().saturating_sub(inner.height as usize);
        self.scroll_back = self.scroll_back.min(overflow);
        let top = scroll_offset(overflow, self.scroll_back);
        frame.render_widget(Paragraph::new(lines).scroll((top, 0)).block(block), area);
    }

    fn render_questions(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if self.focus == ChatFocus::QuickQuestions {
                t.border_focused_style()
            } else {
                t.border_style()
            })
            .title(" Quick questions ");
        let items: Vec<ListItem> = QUICK_QUESTIONS.iter().map(|q| ListItem::new(*q)).collect();
        let mut list = List::new(items).block(block).style(t.text_style());
        if self.focus == ChatFocus::QuickQuestions {
            list = list
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        }
        frame.render_stateful_widget(list, area, &mut self.questions);
    }
}

impl Screen for AssistantScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, 1);
        let status = if self.assistant.is_typing() {
            "typing…"
        } else {
            "online"
        };
        Header::render(frame, header, "Pixi", "Your campus buddy", Some(status));

        let questions_height = if self.assistant.shows_quick_questions() {
            QUICK_QUESTIONS.len() as u16 + 2
        } else {
            0
        };
        let [transcript, questions, input] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(questions_height),
            Constraint::Length(3),
        ])
        .areas(content);

        self.render_transcript(frame, transcript);
        if questions_height > 0 {
            self.render_questions(frame, questions);
        }
        frame.render_text_input_widget(
            TextInputWidget::new(&self.input)
                .title("Message")
                .placeholder("Ask Pixi anything...")
                .focused(self.focus == ChatFocus::Input),
            input,
        );

        let hint = match self.focus {
            ChatFocus::Input => "Enter: Send | Tab: Switch focus | Esc: Leave input".to_string(),
            ChatFocus::QuickQuestions => format!(
                "{}: Choose | {}: Use question | {}: Leave",
                ctx.keymap.navigation_display(),
                ctx.keymap.confirm_display(),
                ctx.keymap.back_display()
            ),
            ChatFocus::Transcript => format!(
                "{}: Scroll | {}: Write | 1-5: Tabs | ?: Help",
                ctx.keymap.navigation_display(),
                ctx.keymap.confirm_display()
            ),
        };
        Footer::render(frame, footer, &hint);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match self.focus {
            ChatFocus::Input => self.handle_input_key(&event, ctx),
            ChatFocus::QuickQuestions => self.handle_questions_key(&event, ctx),
            ChatFocus::Transcript => self.handle_transcript_key(&event, ctx),
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        self.focus == ChatFocus::Input
    }

    fn tick(&mut self, now: Instant) -> ScreenAction {
        if self.assistant.tick(now) > 0 {
            self.scroll_back = 0;
        }
        ScreenAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::GREETING;
    use crate::config::{AssistantConfig, Config};
    use crate::state::SessionState;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn screen() -> AssistantScreen {
        AssistantScreen::new(Assistant::with_rng(
            &AssistantConfig::default(),
            StdRng::seed_from_u64(3),
        ))
    }

    fn press_at(screen: &mut AssistantScreen, code: KeyCode, now: Instant) {
        let config = Config::default();
        let session = SessionState::new();
        let ctx = ScreenContext::new(&config, &session, now);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap();
    }

    fn type_text(screen: &mut AssistantScreen, text: &str, now: Instant) {
        for c in text.chars() {
            press_at(screen, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_send_clears_input_and_reply_arrives() {
        let now = Instant::now();
        let mut screen = screen();
        type_text(&mut screen, "What's for lunch?", now);
        press_at(&mut screen, KeyCode::Enter, now);

        assert_eq!(screen.input(), "");
        assert!(screen.assistant().is_typing());
        assert_eq!(screen.assistant().transcript().len(), 2);

        screen.tick(now + Duration::from_millis(2000));
        let transcript = screen.assistant().transcript();
        assert_eq!(transcript.len(), 3);
        assert!(transcript[2].text.starts_with("Today's Mensa menu"));
        assert_eq!(transcript[0].text, GREETING);
    }

    #[test]
    fn test_blank_send_does_nothing() {
        let now = Instant::now();
        let mut screen = screen();
        type_text(&mut screen, "   ", now);
        press_at(&mut screen, KeyCode::Enter, now);
        assert_eq!(screen.assistant().transcript().len(), 1);
        assert!(screen.assistant().shows_quick_questions());
    }

    #[test]
    fn test_quick_question_fills_input() {
        let now = Instant::now();
        let mut screen = screen();
        press_at(&mut screen, KeyCode::Up, now);
        assert_eq!(screen.focus(), ChatFocus::QuickQuestions);
        press_at(&mut screen, KeyCode::Down, now);
        press_at(&mut screen, KeyCode::Enter, now);
        assert_eq!(screen.input(), QUICK_QUESTIONS[1]);
        assert_eq!(screen.focus(), ChatFocus::Input);
    }

    #[test]
    fn test_esc_releases_input_focus() {
        let now = Instant::now();
        let mut screen = screen();
        assert!(screen.is_input_focused());
        press_at(&mut screen, KeyCode::Esc, now);
        assert!(!screen.is_input_focused());
        press_at(&mut screen, KeyCode::Enter, now);
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_scroll_offset_saturates() {
        assert_eq!(scroll_offset(10, 3), 7);
        assert_eq!(scroll_offset(3, 10), 0);
        assert_eq!(scroll_offset(70_000, 0), u16::MAX);
        assert_eq!(scroll_offset(70_000, 70_000 - 12), 12);
    }
}
