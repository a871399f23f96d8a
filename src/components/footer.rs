use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// One-line key hint bar: "keys: Label | keys: Label".
pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(Paragraph::new(Self::line(text)).alignment(Alignment::Center), area);
    }

    fn line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
                    spans.push(Span::styled(format!(": {}", label), t.text_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        Line::from(spans)
    }
}
