//! The bottom navigation bar.

use crate::icons::Icons;
use crate::state::Screen;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

pub struct BottomNav;

impl BottomNav {
    pub const HEIGHT: u16 = 2;

    /// Five tabs with their shortcut digit. `active` is highlighted; the
    /// badge count is drawn on the Profile tab.
    pub fn render(frame: &mut Frame, area: Rect, active: Screen, badge: u32, icons: &Icons) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(inner);
        for (i, (screen, cell)) in Screen::NAV_TABS.iter().zip(cells.iter()).enumerate() {
            let selected = *screen == active;
            let style = if selected {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            let mut spans = vec![
                Span::styled(format!("{} ", i + 1), t.muted_style()),
                Span::styled(format!("{} {}", Self::icon(*screen, icons), screen.label()), style),
            ];
            if *screen == Screen::Profile && badge > 0 {
                spans.push(Span::styled(format!(" ({})", badge), t.error_style()));
            }
            frame.render_widget(Line::from(spans).alignment(Alignment::Center), *cell);
        }
    }

    fn icon(screen: Screen, icons: &Icons) -> &'static str {
        match screen {
            Screen::Dashboard => icons.home(),
            Screen::Events | Screen::EventDetails => icons.calendar(),
            Screen::Social => icons.users(),
            Screen::Assistant => icons.robot(),
            Screen::MenuSchedule => icons.utensils(),
            Screen::Notifications => icons.bell(),
            Screen::Profile => icons.user(),
        }
    }
}
