//! Toast notifications.
//!
//! One toast at a time, drawn over the bottom-right corner of the content
//! area. A new toast replaces the current one; expiry is checked on tick.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// How long a toast stays up unless overridden.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn symbol(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✔",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✘",
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        match self {
            ToastVariant::Success => t.success_style(),
            ToastVariant::Info => t.border_focused_style(),
            ToastVariant::Warning => t.warning_style(),
            ToastVariant::Error => t.error_style(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Re-anchor the expiry clock, for callers that track time explicitly.
    pub fn created_at(mut self, now: Instant) -> Self {
        self.created_at = now;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Renders one toast in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn placement(&self, area: Rect) -> Rect {
        let width = 44u16.min(area.width.saturating_sub(2));
        let text_width = width.saturating_sub(4).max(1) as usize;
        let lines = (self.toast.message.chars().count() + 3).div_ceil(text_width) as u16;
        let height = (lines + 2).min(area.height);
        Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + area.height.saturating_sub(height),
            width,
            height,
        )
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = self.placement(area);
        Clear.render(rect, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.toast.variant.border_style());
        Paragraph::new(format!("{} {}", self.toast.variant.symbol(), self.toast.message))
            .block(block)
            .style(theme().text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(rect, buf);
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `toast`, replacing whatever is up.
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::info(message));
    }

    /// Drop an expired toast. Returns whether one is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let now = Instant::now();
        let toast = Toast::success("Joined").created_at(now);
        assert!(!toast.is_expired_at(now + Duration::from_millis(2999)));
        assert!(toast.is_expired_at(now + Duration::from_millis(3000)));
    }

    #[test]
    fn test_manager_replaces_and_expires() {
        let now = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.push(Toast::info("first").created_at(now));
        toasts.push(Toast::info("second").created_at(now));
        assert_eq!(toasts.current().unwrap().message, "second");

        assert!(toasts.tick(now + Duration::from_secs(1)));
        assert!(!toasts.tick(now + Duration::from_secs(3)));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_placement_stays_inside_area() {
        let toast = Toast::info("A fairly long message that needs to wrap onto a second line");
        let area = Rect::new(0, 0, 30, 10);
        let rect = ToastWidget::new(&toast).placement(area);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
        assert!(rect.height >= 3);
    }
}
