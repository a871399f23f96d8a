//! Layout helpers shared by screens and overlays.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Header / content / footer split used by every main screen.
pub fn create_standard_layout(
    area: Rect,
    header_height: u16,
    footer_height: u16,
) -> (Rect, Rect, Rect) {
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);
    (header, content, footer)
}

/// A rectangle of `percent_x` x `percent_y` centred in `area`.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// A column at most `max_width` wide, centred horizontally.
///
/// Keeps card layouts readable on very wide terminals.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 30), 3, 1);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(content.height, 26);
        assert_eq!(footer.y, 29);
    }

    #[test]
    fn test_center_popup_is_centered() {
        let popup = center_popup(Rect::new(0, 0, 100, 50), 60, 40);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_column() {
        let col = centered_column(Rect::new(0, 0, 120, 10), 80);
        assert_eq!((col.x, col.width), (20, 80));
        let narrow = centered_column(Rect::new(5, 0, 40, 10), 80);
        assert_eq!((narrow.x, narrow.width), (5, 40));
    }
}
