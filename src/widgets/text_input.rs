//! Rendering for [`TextInput`].

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

/// A bordered single-line input with placeholder and cursor.
///
/// Render through [`TextInputWidgetExt::render_text_input_widget`] so the
/// terminal cursor lands at the edit position when focused.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn display_text(&self) -> &str {
        if self.input.text().is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            self.input.text()
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Horizontal scroll so the cursor stays visible in `width` cells.
    fn scroll(&self, width: u16) -> u16 {
        let cursor = self.input.cursor() as u16;
        cursor.saturating_sub(width.saturating_sub(1))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = self.block();
        let inner = block.inner(area);
        let style = if self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        };
        Paragraph::new(self.display_text())
            .style(style)
            .scroll((0, self.scroll(inner.width)))
            .block(block)
            .render(area, buf);
    }
}

pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let inner = widget.block().inner(area);
        let cursor = (widget.input.cursor() as u16 - widget.scroll(inner.width))
            .min(inner.width.saturating_sub(1));
        let focused = widget.focused;
        self.render_widget(widget, area);
        if focused && inner.width > 0 {
            self.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
