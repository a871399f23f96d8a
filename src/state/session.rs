//! Process-wide session state.

use super::{ActiveView, EventId, FlowStage, Screen, UserRole};

/// In-memory values that exist only for the lifetime of one run.
///
/// Fields are private: the only way to change them is through the
/// [`FlowController`](crate::controller::FlowController) transitions, which
/// keep the invariants below.
///
/// * `stage == Main` ⇔ a role is set and `screen` is rendered.
/// * `screen == EventDetails` ⇒ `selected_event.is_some()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    stage: FlowStage,
    screen: Screen,
    selected_event: Option<EventId>,
    role: Option<UserRole>,
}

impl SessionState {
    /// Initial state: Splash stage, Dashboard screen, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    /// The main-app screen. Only meaningful while `stage() == Main`.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_event(&self) -> Option<EventId> {
        self.selected_event
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    pub fn view(&self) -> ActiveView {
        match self.stage {
            FlowStage::Splash => ActiveView::Splash,
            FlowStage::Onboarding => ActiveView::Onboarding,
            FlowStage::Login => ActiveView::Login,
            FlowStage::Main => ActiveView::Main(self.screen),
        }
    }

    pub(crate) fn set_stage(&mut self, stage: FlowStage) {
        self.stage = stage;
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub(crate) fn set_selected_event(&mut self, id: EventId) {
        self.selected_event = Some(id);
    }

    pub(crate) fn set_role(&mut self, role: UserRole) {
        self.role = Some(role);
    }

    /// Back to initial defaults (logout).
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_session() {
        let session = SessionState::new();
        assert_eq!(session.stage(), FlowStage::Splash);
        assert_eq!(session.screen(), Screen::Dashboard);
        assert_eq!(session.selected_event(), None);
        assert_eq!(session.role(), None);
        assert_eq!(session.view(), ActiveView::Splash);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = SessionState::new();
        session.set_role(UserRole::Admin);
        session.set_stage(FlowStage::Main);
        session.set_selected_event(4);
        session.set_screen(Screen::EventDetails);
        assert_eq!(session.view(), ActiveView::Main(Screen::EventDetails));

        session.reset();
        assert_eq!(session, SessionState::new());
    }
}
