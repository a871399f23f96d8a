//! Help overlay listing the active keybindings by category.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup = center_popup(area, 80, 90);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" Keyboard Shortcuts - {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

        let mut lines = Vec::new();
        for (category, rows) in Self::grouped(keymap) {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(format!(" {}", category), t.accent_style()));
            for (keys, description) in rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("   {:16}", keys), t.emphasis_style()),
                    Span::styled(description, t.text_style()),
                ]));
            }
        }
        frame.render_widget(Paragraph::new(lines), body);

        frame.render_widget(
            Paragraph::new(format!(
                "Edit keybindings in: {}\nPress any key to close",
                config_path
            ))
            .style(t.muted_style())
            .alignment(Alignment::Center),
            footer,
        );
    }

    /// (category, [(keys, description)]) in first-seen order; all keys for
    /// one action share a row.
    fn grouped(keymap: &Keymap) -> Vec<(&'static str, Vec<(String, String)>)> {
        let mut groups: Vec<(&'static str, Vec<(Action, Vec<String>, String)>)> = Vec::new();
        for binding in keymap.all_bindings() {
            let category = binding.action.category();
            let index = match groups.iter().position(|(c, _)| *c == category) {
                Some(i) => i,
                None => {
                    groups.push((category, Vec::new()));
                    groups.len() - 1
                }
            };
            let rows = &mut groups[index].1;
            match rows.iter_mut().find(|(a, _, _)| *a == binding.action) {
                Some((_, keys, _)) => keys.push(binding.display()),
                None => rows.push((
                    binding.action,
                    vec![binding.display()],
                    binding.get_description().to_string(),
                )),
            }
        }
        groups
            .into_iter()
            .map(|(category, rows)| {
                let rows = rows
                    .into_iter()
                    .map(|(_, keys, description)| (keys.join("/"), description))
                    .collect();
                (category, rows)
            })
            .collect()
    }
}
