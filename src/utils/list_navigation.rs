//! Selection movement for `ListState`, driven by keymap actions.

use crate::keymap::Action;
use ratatui::widgets::ListState;

/// Page size for PageUp/PageDown.
pub const DEFAULT_PAGE_SIZE: usize = 5;

pub trait ListStateExt {
    fn move_up_by(&mut self, count: usize, total_items: usize);
    fn move_down_by(&mut self, count: usize, total_items: usize);
    fn select_first_item(&mut self, total_items: usize);
    fn select_last_item(&mut self, total_items: usize);

    /// Keep the selection inside `0..total_items` after the list shrank.
    fn clamp_to(&mut self, total_items: usize);

    /// Apply a navigation action. Returns true if the action was one.
    fn apply_navigation(&mut self, action: Action, total_items: usize) -> bool;
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.saturating_sub(count)));
    }

    fn move_down_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some((current + count).min(total_items - 1)));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_to(&mut self, total_items: usize) {
        match (self.selected(), total_items) {
            (_, 0) => self.select(None),
            (Some(i), n) if i >= n => self.select(Some(n - 1)),
            (None, _) => self.select(Some(0)),
            _ => {}
        }
    }

    fn apply_navigation(&mut self, action: Action, total_items: usize) -> bool {
        match action {
            Action::MoveUp => self.move_up_by(1, total_items),
            Action::MoveDown => self.move_down_by(1, total_items),
            Action::PageUp => self.move_up_by(DEFAULT_PAGE_SIZE, total_items),
            Action::PageDown => self.move_down_by(DEFAULT_PAGE_SIZE, total_items),
            Action::GoToTop => self.select_first_item(total_items),
            Action::GoToEnd => self.select_last_item(total_items),
            _ => return false,
        }
        true
    }
}

/// Step an index through `0..len`, wrapping at both ends.
pub fn wrap_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_saturates() {
        let mut state = ListState::default();
        state.select(Some(2));
        state.move_up_by(10, 5);
        assert_eq!(state.selected(), Some(0));
        state.move_down_by(10, 5);
        assert_eq!(state.selected(), Some(4));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(2));
        state.clamp_to(0);
        assert_eq!(state.selected(), None);
        state.clamp_to(4);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_apply_navigation() {
        let mut state = ListState::default();
        state.select(Some(0));
        assert!(state.apply_navigation(Action::GoToEnd, 6));
        assert_eq!(state.selected(), Some(5));
        assert!(state.apply_navigation(Action::PageUp, 6));
        assert_eq!(state.selected(), Some(0));
        assert!(!state.apply_navigation(Action::Confirm, 6));
    }

    #[test]
    fn test_empty_list_keeps_no_selection() {
        let mut state = ListState::default();
        state.apply_navigation(Action::MoveDown, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(2, 3, true), 0);
        assert_eq!(wrap_index(0, 3, false), 2);
        assert_eq!(wrap_index(1, 3, true), 2);
        assert_eq!(wrap_index(0, 0, true), 0);
    }
}
