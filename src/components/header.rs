use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

/// Screen header: bordered title bar with a subtitle and an optional
/// right-aligned status such as "3 new".
pub struct Header;

impl Header {
    /// Height a header needs: borders plus one subtitle line
    pub const HEIGHT: u16 = 3;

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        subtitle: &str,
        status: Option<&str>,
    ) {
        let t = theme();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(Line::styled(format!(" {} ", title), t.title_style()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_width = status.map_or(0, |s| s.chars().count() as u16 + 1);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(inner);

        frame.render_widget(Paragraph::new(subtitle).style(t.muted_style()), left);
        if let Some(status) = status {
            frame.render_widget(
                Paragraph::new(status)
                    .style(t.accent_style())
                    .alignment(Alignment::Right),
                right,
            );
        }
    }
}
